//! Cross-layer tests for the account crate
//! Controller → use case → repository, wired the way the router wires them.

#[cfg(test)]
mod sign_up_flow_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use kernel::http::{HttpRequest, HttpResponse};
    use kernel::port::{Controller, UseCase};
    use serde_json::json;

    use crate::application::config::{AccountConfig, DispatchMode, DuplicateCheck, IdStrategy};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::domain::entity::user::{StoredUser, User, UserRecord};
    use crate::domain::repository::UserRepository;
    use crate::error::AccountError;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::controller::SignUpController;

    fn wire(
        repo: InMemoryUserRepository,
        config: AccountConfig,
    ) -> (SignUpController<InMemoryUserRepository>, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(repo);
        let config = Arc::new(config);
        let use_case = Arc::new(SignUpUseCase::new(repo.clone(), config.clone()));
        (SignUpController::new(use_case, config), repo)
    }

    fn record(email: &str) -> UserRecord {
        UserRecord {
            id: "id".into(),
            name: "A".into(),
            email: email.into(),
            password: "p".into(),
        }
    }

    #[test]
    fn test_priority_order_across_all_subsets() {
        let expected = [
            "Id is required",
            "Name is required",
            "E-mail is required",
            "Password is required",
        ];

        // Each bit marks a field as empty; the first set bit decides the message.
        for mask in 1u8..16 {
            let field = |bit: u8, value: &str| {
                if mask & (1 << bit) != 0 {
                    String::new()
                } else {
                    value.to_string()
                }
            };
            let rec = UserRecord {
                id: field(0, "id"),
                name: field(1, "A"),
                email: field(2, "a@b.com"),
                password: field(3, "p"),
            };

            let first = mask.trailing_zeros() as usize;
            match User::new(rec) {
                Err(AccountError::BadRequest(msg)) => assert_eq!(msg, expected[first]),
                other => panic!("mask {mask:#06b}: expected BadRequest, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_default_wiring_answers_201_on_empty_store() {
        let (ctrl, _) = wire(InMemoryUserRepository::new(), AccountConfig::default());

        let res = ctrl
            .handle(HttpRequest::from_json(
                json!({ "email": "a@b.com", "name": "A", "password": "p" }),
            ))
            .await;
        assert_eq!(res, HttpResponse::created());
    }

    #[tokio::test]
    async fn test_default_wiring_creates_in_background_when_email_is_known() {
        let seeded = InMemoryUserRepository::with_users([StoredUser::new(record("a@b.com"))]);
        let (ctrl, repo) = wire(seeded, AccountConfig::default());

        let res = ctrl
            .handle(HttpRequest::from_json(
                json!({ "email": "a@b.com", "name": "B", "password": "q" }),
            ))
            .await;
        assert_eq!(res, HttpResponse::created());

        let mut stored = repo.len().await;
        for _ in 0..50 {
            if stored == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            stored = repo.len().await;
        }
        assert_eq!(stored, 2);
    }

    #[tokio::test]
    async fn test_default_wiring_creates_when_email_is_known() {
        let seeded = InMemoryUserRepository::with_users([StoredUser::new(record("a@b.com"))]);
        let config = AccountConfig {
            dispatch: DispatchMode::Awaited,
            ..AccountConfig::default()
        };
        let (ctrl, repo) = wire(seeded, config);

        let res = ctrl
            .handle(HttpRequest::from_json(
                json!({ "email": "a@b.com", "name": "B", "password": "q" }),
            ))
            .await;

        assert_eq!(res.status_code, 201);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_development_wiring_round_trip() {
        let (ctrl, repo) = wire(InMemoryUserRepository::new(), AccountConfig::development());
        let body = json!({ "email": "new@b.com", "name": "N", "password": "pw" });

        let first = ctrl.handle(HttpRequest::from_json(body.clone())).await;
        let second = ctrl.handle(HttpRequest::from_json(body)).await;

        assert_eq!(first.status_code, 201);
        assert_eq!(second, HttpResponse::with_message(409, "User already exists"));

        let stored = repo.get_by_email("new@b.com").await.unwrap().unwrap();
        assert_eq!(stored.record.name, "N");
        assert_eq!(AccountConfig::development().id_strategy, IdStrategy::Uuid);
    }

    #[tokio::test]
    async fn test_use_case_requires_known_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AccountConfig {
            duplicate_check: DuplicateCheck::RequireExisting,
            ..AccountConfig::default()
        });
        let use_case = SignUpUseCase::new(repo.clone(), config);
        let input = SignUpInput {
            id: "id".into(),
            name: "A".into(),
            email: "a@b.com".into(),
            password: "p".into(),
        };

        let err = use_case.execute(input.clone()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(409));

        repo.create(&record("a@b.com")).await.unwrap();
        assert!(use_case.execute(input).await.unwrap());
    }
}
