use axum::http::{HeaderValue, Request};

use tower_http::request_id::{MakeRequestId, RequestId};

use uuid::Uuid;

/// Tags every incoming request with a random v4 UUID.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let request_id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(request_id))
    }
}

/// Extracts the request id set by [`MakeRequestUuid`], if any.
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| "unknown".into())
}
