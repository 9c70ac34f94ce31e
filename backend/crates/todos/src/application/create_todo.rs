//! Create Todo Use Case

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::entity::todo::NewTodo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Create todo use case
pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }

    /// Validate the content and insert a todo owned by `caller`.
    pub async fn execute(&self, content: &str, caller: UserId) -> TodoResult<TodoId> {
        let todo = NewTodo::new(content, caller)?;
        let todo_id = self.todo_repo.create(&todo).await?;

        tracing::info!(todo_id = %todo_id, user_id = %caller, "Todo created");

        Ok(todo_id)
    }
}
