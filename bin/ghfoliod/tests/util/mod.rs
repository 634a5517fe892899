#![allow(dead_code)]

mod database;
mod upstream;

use std::sync::Once;

use anyhow::{anyhow, Result};

use ghfoliod::{Config, Server};

use interface::DynDatabaseHandle;

use serde::de::DeserializeOwned;

pub use database::MockDatabase;
pub use upstream::{RecordedRequest, Upstream, MISSING_USER, ODD_USER, SILENT_USER, SLOW_USER};

pub const TEST_TOKEN: &str = "test-token";

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        xecute::logging::init_logger(&None).unwrap();
    });
}

/// A running ghfoliod wired to a stub GitHub API.
pub struct Ghfolio {
    server: Server,
    pub upstream: Upstream,
    pub url: String,
    pub client: reqwest::Client,
}

impl Ghfolio {
    pub async fn new() -> Result<Self> {
        Self::build(Some(TEST_TOKEN), None).await
    }

    pub async fn anonymous() -> Result<Self> {
        Self::build(None, None).await
    }

    pub async fn with_database(database: DynDatabaseHandle) -> Result<Self> {
        Self::build(Some(TEST_TOKEN), Some(database)).await
    }

    async fn build(token: Option<&str>, database: Option<DynDatabaseHandle>) -> Result<Self> {
        init_logger();

        let upstream = Upstream::start().await?;

        let port = portpicker::pick_unused_port().ok_or_else(|| anyhow!("no free port"))?;
        let mut cfg = Config::from_toml_string(format!(
            r#"
            [server]
            host = "127.0.0.1"
            port = {}

            [github]
            api_url = "{}"
            timeout_seconds = 1
            "#,
            port, upstream.url
        ))?;
        cfg.github.token = token.map(String::from);

        let server = Server::new(cfg, database).await?;
        let url = format!("http://{}", server.local_addr());

        Ok(Self {
            server,
            upstream,
            url,
            client: reqwest::Client::new(),
        })
    }

    pub async fn get<P: AsRef<str>>(&self, path: P) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(format!("{}{}", self.url, path.as_ref()))
            .send()
            .await?;
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned, P: AsRef<str>>(&self, path: P) -> Result<T> {
        let response = self.get(path).await?;
        anyhow::ensure!(
            response.status().is_success(),
            "unexpected status: {}",
            response.status()
        );
        Ok(response.json().await?)
    }

    pub async fn stop_all(self) -> Result<()> {
        self.server.stop().await?;
        self.upstream.stop().await
    }
}
