//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::session::{NewSession, Session};
use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use kernel::id::UserId;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the store-assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find user by id
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by email (login lookup; first match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update name and email; `UserNotFound` when no row matches
    async fn update(&self, user_id: UserId, name: &str, email: &Email) -> AuthResult<()>;

    /// Delete the user (sessions and todos cascade at the store)
    async fn delete(&self, user_id: UserId) -> AuthResult<()>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Insert a fresh session and return the persisted record
    /// (with store-assigned fields)
    async fn create(&self, session: &NewSession) -> AuthResult<Session>;

    /// Look up a session by its cookie token; expiry is enforced by
    /// the caller so expired rows can be lazily deleted
    async fn find_by_token(&self, token: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session by token; deleting an unknown token is not an error
    async fn delete_by_token(&self, token: Uuid) -> AuthResult<()>;

    /// Bulk-delete expired sessions (startup sweep)
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
