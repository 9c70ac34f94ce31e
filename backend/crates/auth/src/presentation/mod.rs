//! Presentation Layer
//!
//! HTTP handlers, form DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, check_session, require_session};
pub use router::{auth_router, auth_router_generic};
