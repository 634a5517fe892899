use std::sync::Arc;

use interface::DynDatabaseHandle;

#[derive(Clone)]
pub struct Context {
    pub github: Arc<github::Client>,
    pub database: Option<DynDatabaseHandle>,
}
