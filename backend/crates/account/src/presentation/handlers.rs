//! HTTP Handlers
//!
//! axum adapters around the framework-neutral controllers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::http::{HttpRequest, HttpResponse};
use kernel::port::Controller;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::error::AccountError;
use crate::presentation::controller::SignUpController;

/// Shared state for account handlers
pub struct AccountAppState<R>
where
    R: UserRepository + Sync + 'static,
{
    pub sign_up: Arc<SignUpController<R>>,
}

impl<R> Clone for AccountAppState<R>
where
    R: UserRepository + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sign_up: self.sign_up.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/account/signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    R: UserRepository + Sync + 'static,
{
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return AccountError::from(AppError::from(rejection)).into_response(),
    };

    let response = state.sign_up.handle(HttpRequest::from_json(body)).await;

    into_axum_response(response)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn into_axum_response(response: HttpResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.body.unwrap_or(Value::Null);

    (status, Json(body)).into_response()
}
