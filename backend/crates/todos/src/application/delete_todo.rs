//! Delete Todo Use Case

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Delete todo use case
pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }

    pub async fn execute(&self, todo_id: TodoId, caller: UserId) -> TodoResult<()> {
        self.todo_repo.delete(todo_id, caller).await?;

        tracing::info!(todo_id = %todo_id, user_id = %caller, "Todo deleted");

        Ok(())
    }
}
