//! Check Session Use Case
//!
//! Validates the cookie token against the store and resolves the
//! authenticated identity. Runs once per guarded request; results are
//! never cached across requests because another request may delete
//! the session concurrently.

use std::sync::Arc;
use uuid::Uuid;

use kernel::principal::Principal;

use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    /// Look up the session behind a cookie token.
    ///
    /// Expiry is checked on read; an expired row is deleted on the
    /// spot and reported as invalid (lazy detection).
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let token = Uuid::parse_str(session_token).map_err(|_| AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_token(token)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete_by_token(token).await?;
            tracing::debug!(session_id = %session.id, "Expired session deleted on read");
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }

    /// Resolve the full identity for a valid session.
    ///
    /// The referenced user is re-fetched on every call; a session
    /// whose user no longer exists is treated as unauthenticated.
    pub async fn resolve_principal(&self, session_token: &str) -> AuthResult<Principal> {
        let session = self.get_session(session_token).await?;

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        Ok(Principal {
            user_id: user.id,
            session_id: session.id,
            session_token: session.token.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name,
        })
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }
}
