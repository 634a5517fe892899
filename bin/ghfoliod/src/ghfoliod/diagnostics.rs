//! Best-effort inspection of the database collaborator.
//!
//! Nothing in here is allowed to fail: every problem ends up as a status string in the report.
use std::any::Any;
use std::env;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use interface::DynDatabaseHandle;

use protocol::DiagnosticsReport;

pub const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_LENGTH: usize = 50;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_MODULE_NOT_FOUND: &str =
    "❌ Database module not found (run enable-database first)";
pub const DATABASE_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_AVAILABLE: &str = "✅ Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const DATABASE_CONFIGURED: &str = "✅ Configured";
pub const DATABASE_CONNECTED: &str = "✅ Connected";

pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

pub const VARIABLE_SET: &str = "✅ Set";
pub const VARIABLE_NOT_SET: &str = "❌ Not Set";

fn initial_report() -> DiagnosticsReport {
    DiagnosticsReport {
        backend: BACKEND_RUNNING.into(),
        database: DATABASE_NOT_AVAILABLE.into(),
        database_url: None,
        database_name: None,
        connection_status: NOT_CONNECTED.into(),
        collections: Vec::new(),
    }
}

/// Keeps the first few characters of an error message.
fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_LENGTH).collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        String::from(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}

fn presence(is_set: bool) -> String {
    if is_set {
        VARIABLE_SET.into()
    } else {
        VARIABLE_NOT_SET.into()
    }
}

/// Returns whether an environment variable is set to a non-empty value.
pub fn env_is_set(key: &str) -> bool {
    env::var_os(key).map(|v| !v.is_empty()).unwrap_or(false)
}

async fn inspect_database(report: &mut DiagnosticsReport, database: Option<&DynDatabaseHandle>) {
    let db = match database {
        Some(db) => db,
        None => {
            tracing::debug!("no database collaborator registered");
            report.database = DATABASE_MODULE_NOT_FOUND.into();
            return;
        }
    };

    if !db.is_available() {
        tracing::debug!("database collaborator is not initialized");
        report.database = DATABASE_NOT_INITIALIZED.into();
        return;
    }

    report.database = DATABASE_AVAILABLE.into();
    report.database_url = Some(DATABASE_CONFIGURED.into());
    report.database_name = Some(db.name().unwrap_or_else(|| DATABASE_CONNECTED.into()));
    report.connection_status = CONNECTED.into();

    match db.list_collections().await {
        Ok(mut collections) => {
            collections.truncate(MAX_LISTED_COLLECTIONS);
            report.collections = collections;
            report.database = DATABASE_WORKING.into();
        }
        Err(e) => {
            tracing::warn!("failed to list collections: {}", e);
            report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
        }
    }
}

/// Builds a diagnostics report.
///
/// `is_set` tells whether an environment variable is set; the database-related variables are
/// checked last and overwrite whatever the collaborator reported for the url and name fields.
pub async fn probe<F>(database: Option<&DynDatabaseHandle>, is_set: F) -> DiagnosticsReport
where
    F: Fn(&str) -> bool,
{
    let mut report = initial_report();

    let inspection = AssertUnwindSafe(inspect_database(&mut report, database))
        .catch_unwind()
        .await;

    if let Err(payload) = inspection {
        let message = panic_message(payload.as_ref());
        tracing::error!("database collaborator panicked: {}", message);
        report.database = format!("❌ Error: {}", truncate(&message));
    }

    report.database_url = Some(presence(is_set(DATABASE_URL_VAR)));
    report.database_name = Some(presence(is_set(DATABASE_NAME_VAR)));

    report
}
