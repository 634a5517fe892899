//! Shared building blocks for the ghfolio HTTP layer.
pub mod middleware;
pub mod payload;
pub mod reject;
pub mod reply;

pub use reject::HTTPError;
