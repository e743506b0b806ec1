//! Controller port

use crate::http::{HttpRequest, HttpResponse};

/// Adapter between the request/response envelope and a use case.
///
/// Never fails: every outcome, including errors, is expressed as an
/// [`HttpResponse`].
#[trait_variant::make(Controller: Send)]
pub trait LocalController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
