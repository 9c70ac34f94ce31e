//! Todo Error Types
//!
//! Todo-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Todo-specific error variants
#[derive(Debug, Error)]
pub enum TodoError {
    /// Content was empty or whitespace-only
    #[error("Content must not be empty")]
    EmptyContent,

    /// No todo with that id exists
    #[error("Todo not found")]
    NotFound,

    /// The todo exists but belongs to another user
    #[error("Todo belongs to another user")]
    NotOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::EmptyContent => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::NotOwner => StatusCode::FORBIDDEN,
            TodoError::Database(_) | TodoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::EmptyContent => ErrorKind::BadRequest,
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::NotOwner => ErrorKind::Forbidden,
            TodoError::Database(_) | TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            TodoError::NotOwner => {
                tracing::warn!("Cross-user todo access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::render::RenderError> for TodoError {
    fn from(err: platform::render::RenderError) -> Self {
        TodoError::Internal(err.to_string())
    }
}
