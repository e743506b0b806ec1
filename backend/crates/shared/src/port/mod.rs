//! Ports shared by every feature crate
//!
//! A feature exposes one [`UseCase`] per business action and one
//! [`Controller`] per endpoint. Both are capability traits; concrete types
//! implement them directly.

mod controller;
mod use_case;

pub use controller::{Controller, LocalController};
pub use use_case::{LocalUseCase, UseCase};

#[cfg(test)]
mod tests {
    use super::{Controller, UseCase};
    use crate::http::{HttpRequest, HttpResponse};

    struct Echo;

    impl UseCase<String> for Echo {
        type Output = usize;
        type Error = String;

        async fn execute(&self, input: String) -> Result<usize, String> {
            if input.is_empty() {
                return Err("empty".to_string());
            }
            Ok(input.len())
        }
    }

    struct EchoController(Echo);

    impl Controller for EchoController {
        async fn handle(&self, request: HttpRequest) -> HttpResponse {
            let text = request
                .body
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            match self.0.execute(text).await {
                Ok(len) => HttpResponse {
                    status_code: 200,
                    body: Some(serde_json::json!({ "len": len })),
                },
                Err(msg) => HttpResponse::with_message(400, msg),
            }
        }
    }

    fn assert_send<T: Send>(_: T) {}

    #[tokio::test]
    async fn test_use_case_port() {
        assert_eq!(Echo.execute("abc".to_string()).await, Ok(3));
        assert_eq!(Echo.execute(String::new()).await, Err("empty".to_string()));
    }

    #[tokio::test]
    async fn test_controller_port() {
        let controller = EchoController(Echo);

        let ok = controller
            .handle(HttpRequest::from_json(serde_json::json!({ "text": "hello" })))
            .await;
        assert_eq!(ok.status_code, 200);

        let bad = controller.handle(HttpRequest::default()).await;
        assert_eq!(bad.status_code, 400);
        assert_eq!(bad.message(), Some("empty"));
    }

    #[test]
    fn test_futures_are_send() {
        let controller = EchoController(Echo);
        assert_send(async move { controller.handle(HttpRequest::default()).await });
    }
}
