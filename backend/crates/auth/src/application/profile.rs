//! Profile Use Cases
//!
//! Account maintenance: profile updates and account deletion.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Update name/email of an existing account
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId, name: &str, email: &str) -> AuthResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email = Email::new(email)?;

        self.user_repo.update(user_id, name, &email).await?;

        tracing::info!(user_id = %user_id, "Profile updated");
        Ok(())
    }
}

/// Delete an account
///
/// Sessions and todos cascade at the store, so a deleted account
/// leaves no orphan rows.
pub struct DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> AuthResult<()> {
        self.user_repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "Account deleted");
        Ok(())
    }
}
