use protocol::{ProfileView, RepositoryView};

use serde::{Deserialize, Serialize};
use serde_json::Value;

const OWNER_REPOSITORIES: &str = "owner";

/// A user as returned by `GET /users/{username}`.
///
/// Only the fields ghfolio exposes are kept, untyped: GitHub's values are forwarded as-is and
/// missing fields deserialize to `None`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct User {
    pub login: Option<Value>,
    pub name: Option<Value>,
    pub avatar_url: Option<Value>,
    pub bio: Option<Value>,
    pub location: Option<Value>,
    pub blog: Option<Value>,
    pub html_url: Option<Value>,
    pub followers: Option<Value>,
    pub following: Option<Value>,
    pub public_repos: Option<Value>,
    pub company: Option<Value>,
    pub twitter_username: Option<Value>,
    pub hireable: Option<Value>,
}

/// Whether a display name carries nothing worth showing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl From<User> for ProfileView {
    fn from(user: User) -> Self {
        // Users without a display name are shown under their login.
        let name = user
            .name
            .filter(|n| !is_blank(n))
            .or_else(|| user.login.clone());

        ProfileView {
            login: user.login,
            name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            location: user.location,
            blog: user.blog,
            html_url: user.html_url,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            company: user.company,
            twitter_username: user.twitter_username,
            hireable: user.hireable,
        }
    }
}

fn no_topics() -> Option<Value> {
    Some(Value::Array(Vec::new()))
}

/// A repository as returned by `GET /users/{username}/repos`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Repository {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub full_name: Option<Value>,
    pub html_url: Option<Value>,
    pub description: Option<Value>,
    pub language: Option<Value>,
    pub stargazers_count: Option<Value>,
    pub forks_count: Option<Value>,
    pub updated_at: Option<Value>,
    pub homepage: Option<Value>,

    #[serde(default = "no_topics")]
    pub topics: Option<Value>,

    pub archived: Option<Value>,
    pub visibility: Option<Value>,
}

impl From<Repository> for RepositoryView {
    fn from(repo: Repository) -> Self {
        RepositoryView {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            html_url: repo.html_url,
            description: repo.description,
            language: repo.language,
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            updated_at: repo.updated_at,
            homepage: repo.homepage,
            topics: repo.topics,
            archived: repo.archived,
            visibility: repo.visibility,
        }
    }
}

/// Query parameters of a repository listing.
///
/// Values are forwarded untouched; GitHub decides what to do with out-of-range ones.
#[derive(Clone, Debug, Serialize)]
pub struct RepositoryListing {
    pub per_page: i64,
    pub sort: String,

    #[serde(rename = "type")]
    kind: &'static str,
}

impl RepositoryListing {
    pub fn new<S: Into<String>>(per_page: i64, sort: S) -> Self {
        Self {
            per_page,
            sort: sort.into(),
            kind: OWNER_REPOSITORIES,
        }
    }
}
