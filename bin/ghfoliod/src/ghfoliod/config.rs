use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use config::{builder::DefaultState, Config as ConfigLoader, ConfigBuilder, Environment, File};

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: i64 = 8000;
const DEFAULT_TIMEOUT_SECONDS: i64 = 10;

const ENV_PREFIX: &str = "GHFOLIO";
const ENV_SEPARATOR: &str = "__";

// Plain variables honored for compatibility with PaaS-style deployments.
const PORT_VAR: &str = "PORT";
const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerSetting {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSetting {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GithubSetting {
    pub api_url: String,

    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    pub timeout_seconds: u64,
}

impl GithubSetting {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl fmt::Debug for GithubSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubSetting")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSetting,
    pub github: GithubSetting,
}

impl Config {
    fn default_loader() -> Result<ConfigBuilder<DefaultState>> {
        Ok(ConfigLoader::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("github.api_url", github::DEFAULT_API_URL)?
            .set_default("github.timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?)
    }

    pub fn from_toml_string<S: AsRef<str>>(cfg_string: S) -> Result<Config> {
        let mut loader = Config::default_loader()?;
        loader = loader.add_source(
            File::from_str(cfg_string.as_ref(), config::FileFormat::Toml).required(false),
        );

        let cfg: Config = loader.build()?.try_deserialize()?;

        tracing::debug!(config = ?cfg, "loaded configuration");

        Ok(cfg)
    }

    pub fn from_file(cfg_file: &Option<PathBuf>) -> Result<Config> {
        let mut loader = Config::default_loader()?;

        if let Some(cfg) = cfg_file {
            loader = loader.add_source(File::from(cfg.as_path()).required(false));
        }

        loader = loader.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        if let Some(port) = non_empty_var(PORT_VAR) {
            let port: i64 = port
                .parse()
                .with_context(|| format!("invalid {} value: {}", PORT_VAR, port))?;
            loader = loader.set_override("server.port", port)?;
        }

        if let Some(token) = non_empty_var(GITHUB_TOKEN_VAR) {
            loader = loader.set_override("github.token", token)?;
        }

        let cfg: Config = loader.build()?.try_deserialize()?;

        tracing::debug!(config = ?cfg, "loaded configuration");

        Ok(cfg)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
