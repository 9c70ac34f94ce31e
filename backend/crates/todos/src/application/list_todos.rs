//! List Todos Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// List todos use case
pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    todo_repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }

    /// All of the caller's todos, oldest first. Other users' rows are
    /// never returned.
    pub async fn execute(&self, caller: UserId) -> TodoResult<Vec<Todo>> {
        self.todo_repo.find_by_user(caller).await
    }
}
