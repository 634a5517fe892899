//! A small client for the parts of the GitHub REST API that ghfolio proxies.
mod builder;
mod client;
mod model;
mod parameters;

use parameters::Parameters;

pub use builder::{BuildError, ClientBuilder};
pub use client::{Client, ClientError};
pub use model::{Repository, RepositoryListing, User};

/// Root of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
