//! Sign Up Controller
//!
//! Turns an [`HttpRequest`] into a [`User`], hands it to the use case and
//! maps the outcome to an [`HttpResponse`].

use std::sync::Arc;

use kernel::http::{HttpRequest, HttpResponse};
use kernel::id::UserId;
use kernel::port::{Controller, UseCase};
use serde_json::Value;

use crate::application::config::{AccountConfig, DispatchMode, IdStrategy};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::domain::entity::user::{User, UserRecord};
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::SignUpRequest;

/// Status used when an error carries none of its own
const FALLBACK_STATUS: u16 = 500;

/// Sign up controller
pub struct SignUpController<R>
where
    R: UserRepository,
{
    use_case: Arc<SignUpUseCase<R>>,
    config: Arc<AccountConfig>,
}

impl<R> SignUpController<R>
where
    R: UserRepository + Sync + 'static,
{
    pub fn new(use_case: Arc<SignUpUseCase<R>>, config: Arc<AccountConfig>) -> Self {
        Self { use_case, config }
    }

    fn next_id(&self) -> UserId {
        match self.config.id_strategy {
            IdStrategy::Placeholder => UserId::placeholder(),
            IdStrategy::Uuid => UserId::random(),
        }
    }

    fn build_user(&self, request: HttpRequest) -> AccountResult<User> {
        let body: SignUpRequest = serde_json::from_value(Value::Object(request.body))?;

        User::new(UserRecord {
            id: self.next_id().into(),
            name: body.name.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            password: body.password.unwrap_or_default(),
        })
    }

    async fn dispatch(&self, input: SignUpInput) -> AccountResult<()> {
        match self.config.dispatch {
            DispatchMode::Awaited => {
                self.use_case.execute(input).await?;
            }
            DispatchMode::Detached => match tokio::runtime::Handle::try_current() {
                Ok(runtime) => {
                    let use_case = self.use_case.clone();
                    runtime.spawn(async move {
                        if let Err(err) = use_case.execute(input).await {
                            err.log();
                        }
                    });
                }
                Err(_) => {
                    tracing::warn!("No tokio runtime to detach sign-up onto, running it inline");
                    if let Err(err) = self.use_case.execute(input).await {
                        err.log();
                    }
                }
            },
        }
        Ok(())
    }

    async fn run(&self, request: HttpRequest) -> AccountResult<()> {
        let user = self.build_user(request)?;
        self.dispatch(user.into()).await
    }
}

impl<R> Controller for SignUpController<R>
where
    R: UserRepository + Sync + 'static,
{
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.run(request).await {
            Ok(()) => HttpResponse::created(),
            Err(err) => error_response(err),
        }
    }
}

fn error_response(err: AccountError) -> HttpResponse {
    err.log();
    match err.status_code() {
        Some(status) => HttpResponse::with_message(status, err.to_string()),
        None => HttpResponse::empty(FALLBACK_STATUS),
    }
}
