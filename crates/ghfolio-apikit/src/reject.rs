//! Commonly used rejections.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::reply;

const MESSAGE_INVALID_REQUEST: &str = "invalid request";

#[derive(Debug)]
pub enum HTTPError {
    /// The request was well-formed but its parameters could not be used.
    UnprocessableEntity { error: String },
    /// An error whose status code was decided elsewhere, e.g. by an upstream API.
    Status { status: StatusCode, error: String },
    InternalServerError { error: String },
}

impl HTTPError {
    pub fn unprocessable_entity<S: ToString>(s: S) -> Self {
        Self::UnprocessableEntity {
            error: s.to_string(),
        }
    }

    pub fn with_status<S: ToString>(status: StatusCode, s: S) -> Self {
        Self::Status {
            status,
            error: s.to_string(),
        }
    }

    pub fn internal_server_error<S: ToString>(s: S) -> Self {
        Self::InternalServerError {
            error: s.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Status { status, .. } => *status,
            Self::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::UnprocessableEntity { error } => {
                tracing::info!(info = %error, "rejection: UnprocessableEntity");
                reply::error(format!("{}: {}", MESSAGE_INVALID_REQUEST, error), status)
            }
            Self::Status { error, .. } => {
                tracing::info!(status = ?status, "rejection: {}", error);
                reply::error(error, status)
            }
            Self::InternalServerError { error } => {
                tracing::error!("error: {}", error);
                reply::error(error, status)
            }
        }
    }
}
