//! Error mapping between core services and HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::task::{ports::TaskRepositoryError, services::TaskStoreError};
use crate::user::services::UserRosterError;

/// HTTP-facing error for the REST interface.
///
/// Every failure serialises as `{"error": <message>}`; the variant picks
/// the status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced record does not exist, or the path id did not parse
    /// as an integer.
    #[error("{0}")]
    NotFound(String),

    /// The request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure inside the core services.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Canonical not-found error for task routes.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::NotFound("Task not found".to_owned())
    }

    /// Canonical not-found error for user routes.
    #[must_use]
    pub fn user_not_found() -> Self {
        Self::NotFound("User not found".to_owned())
    }

    /// Returns the response status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskStoreError> for ApiError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Validation(domain) => Self::Validation(domain.to_string()),
            TaskStoreError::NotFound(_)
            | TaskStoreError::Repository(TaskRepositoryError::NotFound(_)) => Self::task_not_found(),
            TaskStoreError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl From<UserRosterError> for ApiError {
    fn from(err: UserRosterError) -> Self {
        match err {
            UserRosterError::Validation(domain) => Self::Validation(domain.to_string()),
            UserRosterError::NotFound(_) => Self::user_not_found(),
            UserRosterError::Repository(other) => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
