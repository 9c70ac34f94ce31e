//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, form DTOs, router, middleware
//!
//! ## Features
//! - User signup/login with email + password
//! - Server-side sessions referenced by an opaque cookie token
//! - Session guard middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with salted Argon2id, verified in constant time
//! - Session tokens are random v4 UUIDs, validated against the store
//!   on every request (no in-process caching)
//! - Sessions carry an explicit expiry, checked on read

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthStore;
pub use presentation::middleware::{AuthMiddlewareState, check_session, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
