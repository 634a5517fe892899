use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client as ReqwestClient, StatusCode, Url};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use snafu::{ResultExt, Snafu};

use crate::model::{Repository, RepositoryListing, User};
use crate::{ClientBuilder, Parameters};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

const PROFILE_ERROR_FALLBACK: &str = "Failed to fetch profile";
const REPOSITORIES_ERROR_FALLBACK: &str = "Failed to fetch repos";

#[derive(Debug, Snafu)]
pub enum ClientError {
    #[snafu(display("failed to build reqwest client: {}", source))]
    ClientBuildError { source: reqwest::Error },

    #[snafu(display("invalid api url [{}]: {}", url, source))]
    InvalidApiUrl {
        source: url::ParseError,
        url: String,
    },

    #[snafu(display("api url [{}] cannot be used as a base", url))]
    ApiUrlCannotBeABase { url: String },

    #[snafu(display("invalid token: {}", source))]
    InvalidToken { source: InvalidHeaderValue },

    #[snafu(display("failed to execute request: {}", source))]
    RequestExecutionError { source: reqwest::Error },

    #[snafu(display("failed to fetch response body: {}", source))]
    FetchBodyError { source: reqwest::Error },

    #[snafu(display("failed to deserialize response: {}", source))]
    ResponseDeserializationError { source: serde_json::Error },

    #[snafu(display("upstream returned {}: {}", status, message))]
    UpstreamError { status: StatusCode, message: String },
}

type Result<T> = std::result::Result<T, ClientError>;

/// Error payload returned by the GitHub API.
#[derive(Deserialize)]
struct UpstreamMessage {
    message: Option<String>,
}

async fn extract_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body_bytes = response.bytes().await.context(FetchBodySnafu)?;
    serde_json::from_slice(body_bytes.as_ref()).context(ResponseDeserializationSnafu)
}

async fn extract_error(response: reqwest::Response, fallback: &str) -> ClientError {
    let status = response.status();
    let message = extract_body::<UpstreamMessage>(response)
        .await
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| String::from(fallback));

    ClientError::UpstreamError { status, message }
}

/// A client for the GitHub REST API.
///
/// Cheap to share: the inner connection pool is reused by every request.
pub struct Client {
    api_url: Url,
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub(crate) fn new_with_params(params: Parameters) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(token) = params.token {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token)).context(InvalidTokenSnafu)?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = ReqwestClient::builder()
            .user_agent(params.user_agent)
            .default_headers(headers)
            .pool_idle_timeout(params.pool_idle_timeout)
            .timeout(params.request_timeout)
            .build()
            .context(ClientBuildSnafu)?;

        let api_url = Url::parse(&params.api_url).context(InvalidApiUrlSnafu {
            url: params.api_url.clone(),
        })?;
        if api_url.cannot_be_a_base() {
            return ApiUrlCannotBeABaseSnafu {
                url: params.api_url,
            }
            .fail();
        }

        Ok(Self { api_url, client })
    }

    /// Builds the url of an endpoint, percent-encoding every segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ApiUrlCannotBeABase {
                url: self.api_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch the public profile of a user.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn profile(&self, username: &str) -> Result<User> {
        let url = self.endpoint(&["users", username])?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context(RequestExecutionSnafu)?;

        if response.status() != StatusCode::OK {
            return Err(extract_error(response, PROFILE_ERROR_FALLBACK).await);
        }

        extract_body(response).await
    }

    /// Fetch a single page of the repositories owned by a user, in upstream order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn repositories(
        &self,
        username: &str,
        listing: &RepositoryListing,
    ) -> Result<Vec<Repository>> {
        let url = self.endpoint(&["users", username, "repos"])?;

        let response = self
            .client
            .get(url)
            .query(listing)
            .send()
            .await
            .context(RequestExecutionSnafu)?;

        if response.status() != StatusCode::OK {
            return Err(extract_error(response, REPOSITORIES_ERROR_FALLBACK).await);
        }

        extract_body(response).await
    }
}
