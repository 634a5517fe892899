mod context;
mod handlers;
mod layer;
mod router;
mod server_impl;

use axum::Router;

use context::Context;

pub use server_impl::Server;

/// Builds the complete application: routes, CORS policy, tracing and request context.
fn build_router(context: Context) -> Router {
    layer::wrap(router::new(), context)
}
