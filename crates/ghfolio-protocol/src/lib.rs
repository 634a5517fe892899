//! Payloads returned by the ghfolio API.
mod diagnostics;
mod github;

pub use diagnostics::DiagnosticsReport;
pub use github::{ProfileView, RepositoryListResponse, RepositoryView};
