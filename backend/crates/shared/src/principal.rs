//! Principal - the authenticated request identity
//!
//! Resolved once per request by the session middleware and handed to
//! handlers through request extensions. Domain crates consume it
//! without depending on the auth crate.

use crate::id::{SessionId, UserId};

/// The identity behind a validated session.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Store-assigned user id
    pub user_id: UserId,
    /// Store-assigned id of the backing session row
    pub session_id: SessionId,
    /// Opaque session token as it appears in the cookie
    pub session_token: String,
    /// The user's login email
    pub email: String,
    /// Display name for page rendering
    pub name: String,
}

/// Result of the non-mandatory session check on public pages.
///
/// `principal` is `Some` when the request carried a valid session
/// cookie; public handlers branch on it (e.g. redirecting an
/// already-signed-in user away from the login page).
#[derive(Debug, Clone, Default)]
pub struct AuthStatus {
    pub principal: Option<Principal>,
}

impl AuthStatus {
    pub fn authenticated(&self) -> bool {
        self.principal.is_some()
    }
}
