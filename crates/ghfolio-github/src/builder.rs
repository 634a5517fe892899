use std::time;

use snafu::{ensure, ResultExt, Snafu};

use crate::client::ClientError;
use crate::{Client, Parameters, DEFAULT_API_URL};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const POOL_IDLE_TIMEOUT: time::Duration = time::Duration::from_secs(30);

#[derive(Debug, Snafu)]
pub enum BuildError {
    #[snafu(display("request timeout must be greater than zero"))]
    ZeroTimeout,

    #[snafu(display("failed to build: {}", source))]
    ClientBuildError { source: ClientError },
}

pub struct ClientBuilder {
    api_url: String,
    token: Option<String>,
    request_timeout: time::Duration,
}

impl ClientBuilder {
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the bearer token sent upstream. Empty tokens are ignored.
    pub fn with_token<S: Into<String>>(mut self, token: Option<S>) -> Self {
        self.token = token.map(Into::into).filter(|t| !t.is_empty());
        self
    }

    pub fn with_request_timeout<T: Into<time::Duration>>(mut self, timeout: T) -> Self {
        self.request_timeout = timeout.into();
        self
    }

    pub fn build(self) -> Result<Client, BuildError> {
        ensure!(!self.request_timeout.is_zero(), ZeroTimeoutSnafu);

        let params = Parameters {
            api_url: self.api_url,
            token: self.token,
            user_agent: format!("ghfolio/{}", VERSION),
            pool_idle_timeout: POOL_IDLE_TIMEOUT,
            request_timeout: self.request_timeout,
        };

        Client::new_with_params(params).context(ClientBuildSnafu)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            token: None,
            request_timeout: time::Duration::from_secs(10),
        }
    }
}
