use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use interface::DynDatabaseHandle;

use tokio::sync::oneshot;
use tokio::task::{spawn, JoinHandle};

use crate::Config;

use super::{build_router, Context};

pub struct Server {
    address: SocketAddr,
    handle: JoinHandle<hyper::Result<()>>,
    stop_tx: oneshot::Sender<()>,
}

impl Server {
    pub async fn new(cfg: Config, database: Option<DynDatabaseHandle>) -> Result<Server> {
        let github = github::Client::builder()
            .with_api_url(cfg.github.api_url.clone())
            .with_token(cfg.github.token.clone())
            .with_request_timeout(cfg.github.request_timeout())
            .build()?;

        let address = cfg.server.address();

        let context = Context {
            github: Arc::new(github),
            database,
        };

        let (stop_tx, stop_rx) = oneshot::channel();

        tracing::debug!("starting http layer on {}", address);
        let srv = axum::Server::try_bind(&address)?.serve(build_router(context).into_make_service());

        // The configured port may be 0, report the one we actually got.
        let address = srv.local_addr();

        let handle = spawn(srv.with_graceful_shutdown(async move {
            stop_rx.await.ok();
            tracing::info!("http layer stop signal received");
        }));

        tracing::info!("ghfoliod is up on {}", address);

        Ok(Server {
            address,
            handle,
            stop_tx,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.address
    }

    pub async fn stop(self) -> Result<()> {
        tracing::info!("requesting to quit");
        self.stop_tx
            .send(())
            .map_err(|_| anyhow!("http layer already stopped"))?;
        self.handle.await??;
        tracing::info!("exited");

        Ok(())
    }
}
