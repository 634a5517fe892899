use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The subset of a GitHub user profile exposed by ghfolio.
///
/// Values are forwarded as GitHub sent them, whatever their JSON type.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileView {
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

/// The subset of a GitHub repository exposed by ghfolio.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepositoryView {
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
    pub topics: Option<Value>,
    pub archived: Option<Value>,
    pub visibility: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepositoryListResponse {
    pub count: usize,
    pub items: Vec<RepositoryView>,
}

impl From<Vec<RepositoryView>> for RepositoryListResponse {
    fn from(items: Vec<RepositoryView>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
