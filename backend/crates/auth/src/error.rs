//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::email::EmailError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Invalid credentials (unknown email or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token absent, unknown, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Input validation failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<EmailError> for AuthError {
    fn from(err: EmailError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::render::RenderError> for AuthError {
    fn from(err: platform::render::RenderError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
