//! Presentation Layer
//!
//! HTTP handlers, form DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TodoAppState;
pub use router::{todos_router, todos_router_generic};
