//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Ownership is part of the contract: `update` and `delete` take the
//! calling user and must fail with `NotOwner` when the row exists but
//! belongs to someone else, so a caller can never touch another user's
//! todos by guessing ids.

use kernel::id::{TodoId, UserId};

use crate::domain::entity::todo::{NewTodo, Todo};
use crate::error::TodoResult;

/// Todo repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// Insert a new todo, returning the store-assigned id
    async fn create(&self, todo: &NewTodo) -> TodoResult<TodoId>;

    /// Find a todo by id regardless of owner
    async fn find_by_id(&self, todo_id: TodoId) -> TodoResult<Option<Todo>>;

    /// All todos owned by a user, oldest first
    async fn find_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>>;

    /// Replace the content of a todo owned by `caller`
    async fn update(&self, todo_id: TodoId, content: &str, caller: UserId) -> TodoResult<()>;

    /// Delete a todo owned by `caller`
    async fn delete(&self, todo_id: TodoId, caller: UserId) -> TodoResult<()>;
}
