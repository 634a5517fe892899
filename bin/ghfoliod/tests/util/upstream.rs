//! A stand-in for the GitHub REST API.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use axum::extract::{Extension, Path, Query};
use axum::http::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use parking_lot::Mutex;

use serde_json::{json, Value};

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const MISSING_USER: &str = "doesnotexist-xyz";
/// Fails without a `message` field in the body.
pub const SILENT_USER: &str = "ratelimited";
/// Returns profile values with unusual JSON types.
pub const ODD_USER: &str = "oddball";
/// Answers slower than the ghfoliod upstream timeout.
pub const SLOW_USER: &str = "slowpoke";

const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(3);
const GITHUB_DEFAULT_PER_PAGE: usize = 30;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    fn record(&self, path: String, query: HashMap<String, String>, headers: &HeaderMap) {
        let header = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        self.requests.lock().push(RecordedRequest {
            path,
            query,
            authorization: header(AUTHORIZATION),
            accept: header(ACCEPT),
            user_agent: header(USER_AGENT),
        });
    }
}

pub fn octocat() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "type": "User",
        "name": null,
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "bio": null,
        "twitter_username": null,
        "hireable": null,
        "public_repos": 8,
        "followers": 9000,
        "following": 9
    })
}

pub fn octocat_repositories() -> Vec<Value> {
    vec![
        json!({
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "private": false,
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repository on GitHub!",
            "fork": false,
            "language": null,
            "stargazers_count": 2600,
            "forks_count": 2400,
            "updated_at": "2024-01-02T03:04:05Z",
            "homepage": "",
            "topics": ["demo", "hello"],
            "archived": false,
            "visibility": "public"
        }),
        json!({
            "id": 1300192,
            "name": "Spoon-Knife",
            "full_name": "octocat/Spoon-Knife",
            "html_url": "https://github.com/octocat/Spoon-Knife",
            "stargazers_count": 12000
        }),
        json!({
            "id": 132935648,
            "name": "boysenberry-repo-1",
            "full_name": "octocat/boysenberry-repo-1",
            "html_url": "https://github.com/octocat/boysenberry-repo-1",
            "description": "Testing",
            "language": null,
            "stargazers_count": 300,
            "forks_count": 20,
            "updated_at": "2023-06-01T00:00:00Z",
            "homepage": null,
            "topics": [],
            "archived": true,
            "visibility": "public"
        }),
    ]
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })),
    )
        .into_response()
}

async fn user(
    Path(username): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Extension(recorder): Extension<Recorder>,
) -> Response {
    recorder.record(format!("/users/{}", username), query, &headers);

    match username.as_str() {
        "octocat" => Json(octocat()).into_response(),
        ODD_USER => Json(json!({
            "login": ODD_USER,
            "name": "",
            "followers": "9000",
            "following": -1,
            "hireable": "sometimes",
            "public_repos": null
        }))
        .into_response(),
        SLOW_USER => {
            tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
            Json(octocat()).into_response()
        }
        SILENT_USER => (StatusCode::FORBIDDEN, "slow down").into_response(),
        _ => not_found(),
    }
}

async fn repositories(
    Path(username): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Extension(recorder): Extension<Recorder>,
) -> Response {
    let per_page = query
        .get("per_page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(GITHUB_DEFAULT_PER_PAGE);

    recorder.record(format!("/users/{}/repos", username), query, &headers);

    match username.as_str() {
        "octocat" => {
            let repos = octocat_repositories()
                .into_iter()
                .take(per_page)
                .collect::<Vec<_>>();
            Json(Value::Array(repos)).into_response()
        }
        SILENT_USER => (StatusCode::FORBIDDEN, Json(json!({}))).into_response(),
        _ => not_found(),
    }
}

pub struct Upstream {
    pub url: String,
    recorder: Recorder,
    handle: JoinHandle<hyper::Result<()>>,
    stop_tx: oneshot::Sender<()>,
}

impl Upstream {
    pub async fn start() -> Result<Self> {
        let recorder = Recorder::default();

        let router = Router::new()
            .route("/users/:username", get(user))
            .route("/users/:username/repos", get(repositories))
            .layer(Extension(recorder.clone()));

        let port = portpicker::pick_unused_port().ok_or_else(|| anyhow!("no free port"))?;
        let address = SocketAddr::from(([127, 0, 0, 1], port));

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let srv = axum::Server::try_bind(&address)?
            .serve(router.into_make_service())
            .with_graceful_shutdown(async move {
                stop_rx.await.ok();
            });

        Ok(Self {
            url: format!("http://{}", address),
            recorder,
            handle: tokio::spawn(srv),
            stop_tx,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorder.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.recorder.requests.lock().last().cloned()
    }

    pub async fn stop(self) -> Result<()> {
        self.stop_tx
            .send(())
            .map_err(|_| anyhow!("upstream already stopped"))?;
        self.handle.await??;
        Ok(())
    }
}
