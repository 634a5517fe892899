use std::path::PathBuf;

use anyhow::Result;

use config::Config;

use serde::{Deserialize, Serialize};

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_TRACKED_CRATES: &[&str] = &[
    "ghfoliod",
    "xecute",
    "apikit",
    "github",
    "interface",
    "tower_http",
];

const LOG_ENV_PREFIX: &str = "GHFOLIO_LOG";

#[cfg(debug_assertions)]
const NORMAL_CRATE_LEVEL: &str = "debug";

#[cfg(not(debug_assertions))]
const NORMAL_CRATE_LEVEL: &str = "info";

#[cfg(debug_assertions)]
const DETAILED_CRATE_LEVEL: &str = "trace";

#[cfg(not(debug_assertions))]
const DETAILED_CRATE_LEVEL: &str = "debug";

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Normal,
    Detailed,
}

impl LogLevel {
    fn crate_level(&self) -> &'static str {
        match self {
            LogLevel::Normal => NORMAL_CRATE_LEVEL,
            LogLevel::Detailed => DETAILED_CRATE_LEVEL,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LogStructure {
    Preset(LogLevel),
    Explicit(Vec<String>),
}

fn default_json() -> bool {
    false
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: LogStructure,

    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogStructure::Preset(LogLevel::Normal),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn directives(&self) -> Vec<String> {
        match &self.level {
            LogStructure::Explicit(dirs) => dirs.clone(),
            LogStructure::Preset(level) => DEFAULT_TRACKED_CRATES
                .iter()
                .map(|crate_name| format!("{}={}", crate_name, level.crate_level()))
                .collect(),
        }
    }

    fn get_filter(&self) -> EnvFilter {
        EnvFilter::new(self.directives().join(","))
    }
}

/// Environment variables (`GHFOLIO_LOG_LEVEL`, `GHFOLIO_LOG_JSON`) take precedence over the file.
fn get_logging_config(path: &Option<PathBuf>) -> Result<LoggingConfig> {
    let mut builder = Config::builder()
        .set_default("level", "normal")?
        .set_default("json", false)?;

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path.as_path()))
    }

    let config: LoggingConfig = builder
        .add_source(config::Environment::with_prefix(LOG_ENV_PREFIX))
        .build()?
        .try_deserialize()?;

    Ok(config)
}

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber was already installed for this process.
pub fn init_logger(log_cfg_path: &Option<PathBuf>) -> Result<()> {
    let cfg = get_logging_config(log_cfg_path)?;

    let env_filter = cfg.get_filter();

    if cfg.json {
        FmtSubscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish()
            .try_init()?;
    } else {
        FmtSubscriber::builder()
            .with_env_filter(env_filter)
            .finish()
            .try_init()?;
    }

    Ok(())
}
