//! Session Entity
//!
//! Proof-of-authentication record. The token is the value placed in
//! the client's cookie; validity means the row exists in the store and
//! has not passed its expiry. Logins are additive: every successful
//! login inserts a fresh row, and concurrent sessions for one user
//! coexist.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};
use uuid::Uuid;

/// Persisted session record
#[derive(Debug, Clone)]
pub struct Session {
    /// Store-assigned id
    pub id: SessionId,
    /// Opaque unguessable cookie token (v4 UUID, unique)
    pub token: Uuid,
    /// Email of the authenticated user at login time
    pub email: String,
    /// Reference to the owning user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Expiry, checked on every read
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Session row about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token: Uuid,
    pub email: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewSession {
    /// Create a session row for a freshly authenticated user
    pub fn new(user_id: UserId, email: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4(),
            email,
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }
}
