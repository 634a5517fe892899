use axum::extract::Extension;
use axum::Json;

use protocol::DiagnosticsReport;

use crate::diagnostics::{env_is_set, probe};
use crate::server::Context;

/// Always answers 200, problems are reported in the body.
#[tracing::instrument(name = "handler.diagnostics", skip(context))]
pub async fn diagnostics(Extension(context): Extension<Context>) -> Json<DiagnosticsReport> {
    Json(probe(context.database.as_ref(), env_is_set).await)
}
