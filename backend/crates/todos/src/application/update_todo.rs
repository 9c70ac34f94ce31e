//! Update Todo Use Case

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::entity::todo::validate_content;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Update todo use case
pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }

    /// Replace the content of the caller's todo. The repository
    /// distinguishes a missing row from a row owned by someone else.
    pub async fn execute(&self, todo_id: TodoId, content: &str, caller: UserId) -> TodoResult<()> {
        let content = validate_content(content)?;
        self.todo_repo.update(todo_id, &content, caller).await?;

        tracing::info!(todo_id = %todo_id, user_id = %caller, "Todo updated");

        Ok(())
    }
}
