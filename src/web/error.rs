//! Error mapping from board failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::task::{
    domain::TaskId,
    ports::TaskRepositoryError,
    services::TaskBoardError,
};

/// Client-facing errors produced by the web layer.
///
/// Every variant renders as a JSON body `{"error": "<message>"}` with the
/// matching status code, on both the page routes and the API routes.
#[derive(Debug, Error)]
pub enum WebError {
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A task with the requested identifier already exists.
    #[error("a task with id {0} already exists")]
    Conflict(TaskId),

    /// Page template rendering failed.
    #[error("template rendering failed: {reason}")]
    Template {
        /// Rendering failure detail.
        reason: String,
    },

    /// The task store failed.
    #[error("storage error: {reason}")]
    Storage {
        /// Storage failure detail.
        reason: String,
    },
}

impl WebError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Template { .. } | Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskBoardError> for WebError {
    fn from(error: TaskBoardError) -> Self {
        match error {
            TaskBoardError::Repository(TaskRepositoryError::NotFound(id)) => Self::NotFound(id),
            TaskBoardError::Repository(TaskRepositoryError::DuplicateTask(id)) => {
                Self::Conflict(id)
            }
            TaskBoardError::Repository(TaskRepositoryError::Storage(source)) => Self::Storage {
                reason: source.to_string(),
            },
        }
    }
}

impl From<minijinja::Error> for WebError {
    fn from(error: minijinja::Error) -> Self {
        Self::Template {
            reason: error.to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
