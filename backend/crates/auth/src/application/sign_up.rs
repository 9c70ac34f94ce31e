//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email = Email::new(input.email)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash the password; the cleartext never leaves
        // this scope
        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash(self.config.pepper())?;

        let user = NewUser::new(name, email, password_hash);
        let user_id = self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user_id,
            user_uuid = %user.uuid,
            "User signed up"
        );

        Ok(SignUpOutput { user_id })
    }
}
