mod database;

pub use database::{DatabaseHandle, DynDatabaseHandle};
