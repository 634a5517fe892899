use std::sync::Arc;

use anyhow::Result;

use async_trait::async_trait;

/// A handle to an external document database.
///
/// ghfolio never reads or writes through this handle; it only reports on it.
#[async_trait]
pub trait DatabaseHandle {
    /// Whether the handle was initialized and can be queried.
    fn is_available(&self) -> bool;

    /// The name of the database this handle points to, if known.
    fn name(&self) -> Option<String>;

    /// Lists the collection (or table) names of the database.
    async fn list_collections(&self) -> Result<Vec<String>>;
}

pub type DynDatabaseHandle = Arc<dyn DatabaseHandle + Send + Sync>;
