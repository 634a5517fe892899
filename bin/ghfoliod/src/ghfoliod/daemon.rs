use std::path::PathBuf;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use xecute::Daemon;

use crate::{Config, Server};

pub struct GhfoliodDaemon {
    server_handle: Option<Server>,
}

impl GhfoliodDaemon {
    pub fn new() -> Self {
        Self {
            server_handle: None,
        }
    }
}

impl Default for GhfoliodDaemon {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Daemon for GhfoliodDaemon {
    type Config = Config;

    fn load_config(&self, path_maybe: &Option<PathBuf>) -> Result<Self::Config> {
        Config::from_file(path_maybe)
    }

    async fn start(&mut self, cfg: Self::Config) -> Result<()> {
        // No database collaborator ships with the daemon; embedders wire one through `Server::new`.
        let server = Server::new(cfg, None).await?;
        self.server_handle = Some(server);
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let handle = self
            .server_handle
            .take()
            .ok_or_else(|| anyhow!("missing server handle"))?;

        handle.stop().await
    }
}
