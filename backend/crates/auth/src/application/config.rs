//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie (name `__cookie__`, HttpOnly, Path=/)
    pub cookie: CookieConfig,
    /// Session lifetime (1 week)
    pub session_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Config for development (insecure cookie over plain HTTP)
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig {
                secure: false,
                ..CookieConfig::default()
            },
            ..Default::default()
        }
    }

    /// Session TTL as a chrono duration for expiry arithmetic
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl)
            .unwrap_or_else(|_| chrono::Duration::days(7))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_contract() {
        let config = AuthConfig::default();
        assert_eq!(config.cookie.name, "__cookie__");
        assert!(config.cookie.http_only);
        assert_eq!(config.cookie.path, "/");
    }

    #[test]
    fn test_ttl_conversion() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::days(7));
    }
}
