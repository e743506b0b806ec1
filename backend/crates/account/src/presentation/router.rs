//! Account Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::SignUpUseCase;
use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::controller::SignUpController;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Account router for any repository implementation
pub fn account_router<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + Sync + 'static,
{
    let config = Arc::new(config);
    let use_case = Arc::new(SignUpUseCase::new(Arc::new(repo), config.clone()));
    let state = AccountAppState {
        sign_up: Arc::new(SignUpController::new(use_case, config)),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::{DispatchMode, DuplicateCheck};
    use crate::infra::memory::InMemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_signup(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_signup_created() {
        let app = account_router(InMemoryUserRepository::new(), AccountConfig::default());
        let body = json!({ "email": "a@b.com", "name": "A", "password": "p" }).to_string();

        let (status, json) = send(app, post_signup(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json, Value::Null);
    }

    #[tokio::test]
    async fn test_signup_missing_email() {
        let app = account_router(InMemoryUserRepository::new(), AccountConfig::default());
        let body = json!({ "name": "A", "password": "p" }).to_string();

        let (status, json) = send(app, post_signup(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "message": "E-mail is required" }));
    }

    #[tokio::test]
    async fn test_signup_malformed_json() {
        let app = account_router(InMemoryUserRepository::new(), AccountConfig::default());

        let (status, json) = send(app, post_signup("{\"email\":")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_signup_duplicate_with_development_config() {
        let config = AccountConfig {
            duplicate_check: DuplicateCheck::RejectExisting,
            dispatch: DispatchMode::Awaited,
            ..AccountConfig::default()
        };
        let app = account_router(InMemoryUserRepository::new(), config);
        let body = json!({ "email": "a@b.com", "name": "A", "password": "p" }).to_string();

        let (first, _) = send(app.clone(), post_signup(body.clone())).await;
        let (second, json) = send(app, post_signup(body)).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CONFLICT);
        assert_eq!(json, json!({ "message": "User already exists" }));
    }
}
