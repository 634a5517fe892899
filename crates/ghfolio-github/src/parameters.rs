use std::time::Duration;

pub struct Parameters {
    pub api_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub pool_idle_timeout: Duration,
    pub request_timeout: Duration,
}
