//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::todo::{NewTodo, Todo};
pub use repository::TodoRepository;
