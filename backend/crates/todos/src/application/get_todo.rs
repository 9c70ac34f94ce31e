//! Get Todo Use Case
//!
//! Fetch a single todo for the edit form. The ownership check happens
//! here rather than at the store so a foreign id yields `NotOwner`
//! instead of a silent miss.

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Get todo use case
pub struct GetTodoUseCase<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> GetTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }

    pub async fn execute(&self, todo_id: TodoId, caller: UserId) -> TodoResult<Todo> {
        let todo = self
            .todo_repo
            .find_by_id(todo_id)
            .await?
            .ok_or(TodoError::NotFound)?;

        if todo.user_id != caller {
            return Err(TodoError::NotOwner);
        }

        Ok(todo)
    }
}
