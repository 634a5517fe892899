use apikit::reject::HTTPError;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query};
use axum::Json;

use github::{ClientError, RepositoryListing};

use protocol::{ProfileView, RepositoryListResponse, RepositoryView};

use serde::Deserialize;

use crate::server::Context;

const DEFAULT_PER_PAGE: i64 = 12;
const DEFAULT_SORT: &str = "updated";

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    username: String,
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

fn default_sort() -> String {
    String::from(DEFAULT_SORT)
}

/// `per_page` must fit in an `i64`; larger integers are rejected like non-numeric ones.
#[derive(Debug, Deserialize)]
pub struct RepositoriesParams {
    username: String,

    #[serde(default = "default_per_page")]
    per_page: i64,

    #[serde(default = "default_sort")]
    sort: String,
}

/// Upstream statuses are passed through, anything else is our failure.
fn upstream_error(e: ClientError) -> HTTPError {
    match e {
        ClientError::UpstreamError { status, message } => HTTPError::with_status(status, message),
        e => HTTPError::internal_server_error(e),
    }
}

#[tracing::instrument(name = "handler.github.profile", skip(params, context))]
pub async fn profile(
    params: Result<Query<ProfileParams>, QueryRejection>,
    Extension(context): Extension<Context>,
) -> Result<Json<ProfileView>, HTTPError> {
    let Query(params) = params.map_err(HTTPError::unprocessable_entity)?;
    tracing::debug!(username = %params.username, "fetching profile");

    let user = context
        .github
        .profile(&params.username)
        .await
        .map_err(upstream_error)?;

    Ok(Json(ProfileView::from(user)))
}

#[tracing::instrument(name = "handler.github.repositories", skip(params, context))]
pub async fn repositories(
    params: Result<Query<RepositoriesParams>, QueryRejection>,
    Extension(context): Extension<Context>,
) -> Result<Json<RepositoryListResponse>, HTTPError> {
    let Query(params) = params.map_err(HTTPError::unprocessable_entity)?;
    tracing::debug!(
        username = %params.username,
        per_page = params.per_page,
        sort = %params.sort,
        "fetching repositories"
    );

    let listing = RepositoryListing::new(params.per_page, params.sort);
    let repositories = context
        .github
        .repositories(&params.username, &listing)
        .await
        .map_err(upstream_error)?;

    let items = repositories
        .into_iter()
        .map(RepositoryView::from)
        .collect::<Vec<_>>();

    Ok(Json(RepositoryListResponse::from(items)))
}
