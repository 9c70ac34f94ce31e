//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::{NewSession, Session};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// The persisted session; `session.token` goes into the cookie
    pub session: Session,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate and create a session.
    ///
    /// Every failure before password verification collapses into
    /// `InvalidCredentials` so the response never reveals whether the
    /// email exists.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Logins are additive: a fresh session row per login, existing
        // sessions stay valid
        let new_session = NewSession::new(
            user.id,
            user.email.as_str().to_string(),
            self.config.session_ttl_chrono(),
        );
        let session = self.session_repo.create(&new_session).await?;

        tracing::info!(
            user_id = %user.id,
            session_id = %session.id,
            "User signed in"
        );

        Ok(SignInOutput { session })
    }
}
