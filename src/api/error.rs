use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::GroupId;
use crate::validation::ValidationError;

/// Errors returned by the request handlers. Each variant maps to one status
/// code and carries the plain-text message sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn group_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Group not found with ID: {}", id))
    }

    pub fn delete_failed(id: GroupId) -> Self {
        Self::Internal(format!("Could not delete group with ID: {}", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest(msg) => tracing::warn!(%status, error = %msg, "Bad request"),
            Self::NotFound(msg) => tracing::warn!(%status, error = %msg, "Resource not found"),
            Self::Internal(msg) => tracing::error!(%status, error = %msg, "Internal server error"),
        }

        (status, self.to_string()).into_response()
    }
}
