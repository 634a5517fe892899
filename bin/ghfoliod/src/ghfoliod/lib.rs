pub mod config;
pub use crate::config::Config;

mod daemon;
pub use daemon::GhfoliodDaemon;

pub mod diagnostics;

mod server;
pub use server::Server;
