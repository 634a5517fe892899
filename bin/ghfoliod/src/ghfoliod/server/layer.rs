use std::time::Duration;

use apikit::middleware::{self, MakeRequestUuid};

use axum::http::Request;
use axum::response::Response;
use axum::{Extension, Router};

use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::Context;

/// Wraps a router in a logging layer.
fn wrap_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|r: &Request<_>| {
                let request_id = middleware::request_id(r);
                tracing::info_span!(
                    "request",
                    id = %request_id,
                    method = %r.method(),
                    uri = %r.uri(),
                )
            })
            .on_request(|_r: &Request<_>, _s: &tracing::Span| {}) // We silence the on-request hook
            .on_response(
                |response: &Response, latency: Duration, _span: &tracing::Span| {
                    tracing::info!(status = ?response.status(), elapsed = ?latency, "complete");
                },
            ),
    )
}

/// Wraps a router with the request context shared by every handler.
fn wrap_extension_layers(router: Router, context: Context) -> Router {
    router.layer(Extension(context))
}

pub fn wrap(mut router: Router, context: Context) -> Router {
    router = wrap_trace_layer(router);
    router = wrap_extension_layers(router, context);

    // Generate an ID for each request and echo it back to the caller.
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
