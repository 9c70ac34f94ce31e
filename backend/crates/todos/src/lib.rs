//! Todos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, form DTOs, router
//!
//! ## Features
//! - Per-user todo lists: list, create, edit, delete
//! - Ownership enforced at the store: a user can only see and modify
//!   their own todos, and cross-user access is distinguishable from a
//!   missing row
//!
//! All routes in this crate expect an authenticated
//! [`kernel::principal::Principal`] request extension, attached by the
//! auth crate's session guard.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TodoError, TodoResult};
pub use infra::postgres::PgTodoStore;
pub use presentation::router::{todos_router, todos_router_generic};
