//! User Entity
//!
//! An account identity. The numeric id is assigned by the store on
//! insert; the UUID is the opaque external identifier generated at
//! signup.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use uuid::Uuid;

use crate::domain::value_object::email::Email;

/// Persisted user record
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned id
    pub id: UserId,
    /// Opaque external identifier
    pub uuid: Uuid,
    /// Display name
    pub name: String,
    /// Login identifier (unique at the store)
    pub email: Email,
    /// Argon2id digest, never the cleartext
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// User record about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uuid: Uuid,
    pub name: String,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: String, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
