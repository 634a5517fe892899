use apikit::reject::HTTPError;

use axum::response::Response;

const ROOT_MESSAGE: &str = "Hello from FastAPI Backend!";
const HELLO_MESSAGE: &str = "Hello from the backend API!";

pub async fn root() -> Result<Response, HTTPError> {
    Ok(apikit::reply::message(ROOT_MESSAGE))
}

pub async fn hello() -> Result<Response, HTTPError> {
    Ok(apikit::reply::message(HELLO_MESSAGE))
}
