use axum::routing::*;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use super::handlers;

/// Every origin, method and header is accepted, credentials included.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn github() -> Router {
    Router::new()
        .route("/profile", get(handlers::github::profile))
        .route("/repos", get(handlers::github::repositories))
}

pub fn new() -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/api/hello", get(handlers::root::hello))
        .route("/test", get(handlers::diagnostics::diagnostics))
        .nest("/api/github", github())
        .layer(cors())
}
