//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Cookie management
//! - The template-rendering collaborator interface

pub mod cookie;
pub mod password;
pub mod render;
