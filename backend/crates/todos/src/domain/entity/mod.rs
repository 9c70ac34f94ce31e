//! Domain Entities

pub mod todo;
