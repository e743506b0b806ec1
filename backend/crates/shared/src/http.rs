//! HTTP-like request/response shapes
//!
//! Framework-neutral envelopes passed between an HTTP adapter and a
//! [`Controller`](crate::port::Controller). The adapter owns the wire; the
//! controller only sees these.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound request. Only the decoded JSON body is carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Build from any JSON value. Non-object values yield an empty body.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(body) => Self { body },
            _ => Self::default(),
        }
    }
}

/// Outbound response
///
/// `body` is `None` when the response carries no payload; the adapter
/// serializes that as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Option<Value>,
}

impl HttpResponse {
    /// 201 with no body
    pub fn created() -> Self {
        Self::empty(201)
    }

    /// Any status with no body
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Any status with a `{"message": ...}` body
    pub fn with_message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: Some(serde_json::json!({ "message": message.into() })),
        }
    }

    /// The `message` field of the body, if present
    pub fn message(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_object() {
        let req = HttpRequest::from_json(json!({ "name": "A" }));
        assert_eq!(req.body.get("name"), Some(&json!("A")));
    }

    #[test]
    fn test_request_from_non_object() {
        assert!(HttpRequest::from_json(json!([1, 2])).body.is_empty());
        assert!(HttpRequest::from_json(Value::Null).body.is_empty());
    }

    #[test]
    fn test_created_has_no_body() {
        let res = HttpResponse::created();
        assert_eq!(res.status_code, 201);
        assert!(res.body.is_none());
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({ "statusCode": 201, "body": null })
        );
    }

    #[test]
    fn test_with_message() {
        let res = HttpResponse::with_message(400, "E-mail is required");
        assert_eq!(res.body, Some(json!({ "message": "E-mail is required" })));
        assert_eq!(res.message(), Some("E-mail is required"));
    }
}
