//! Sign Out Use Case
//!
//! Deletes the session named by the request's cookie and no other.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Delete the session behind this token.
    ///
    /// Deletion is idempotent: an already-deleted token succeeds. A
    /// token that is not even a UUID is reported as invalid.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let token = Uuid::parse_str(session_token).map_err(|_| AuthError::SessionInvalid)?;

        self.session_repo.delete_by_token(token).await?;

        tracing::info!(token = %token, "User signed out");
        Ok(())
    }
}
