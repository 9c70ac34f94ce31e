//! Application Layer
//!
//! Use cases and application services.

pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod update_todo;

// Re-exports
pub use create_todo::CreateTodoUseCase;
pub use delete_todo::DeleteTodoUseCase;
pub use get_todo::GetTodoUseCase;
pub use list_todos::ListTodosUseCase;
pub use update_todo::UpdateTodoUseCase;

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    };

    use kernel::id::{Id, TodoId, UserId};

    use super::*;
    use crate::domain::entity::todo::{NewTodo, Todo};
    use crate::domain::repository::TodoRepository;
    use crate::error::{TodoError, TodoResult};

    /// In-memory store double with the same ownership semantics as the
    /// Postgres implementation.
    #[derive(Default)]
    struct MemTodoStore {
        todos: Mutex<Vec<Todo>>,
        seq: AtomicI64,
    }

    impl TodoRepository for MemTodoStore {
        async fn create(&self, todo: &NewTodo) -> TodoResult<TodoId> {
            let id = Id::new(self.seq.fetch_add(1, Ordering::SeqCst) + 1);
            self.todos.lock().unwrap().push(Todo {
                id,
                content: todo.content.clone(),
                user_id: todo.user_id,
                created_at: todo.created_at,
            });
            Ok(id)
        }

        async fn find_by_id(&self, todo_id: TodoId) -> TodoResult<Option<Todo>> {
            let todos = self.todos.lock().unwrap();
            Ok(todos.iter().find(|t| t.id == todo_id).cloned())
        }

        async fn find_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>> {
            let todos = self.todos.lock().unwrap();
            Ok(todos
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn update(&self, todo_id: TodoId, content: &str, caller: UserId) -> TodoResult<()> {
            let mut todos = self.todos.lock().unwrap();
            let todo = todos
                .iter_mut()
                .find(|t| t.id == todo_id)
                .ok_or(TodoError::NotFound)?;
            if todo.user_id != caller {
                return Err(TodoError::NotOwner);
            }
            todo.content = content.to_string();
            Ok(())
        }

        async fn delete(&self, todo_id: TodoId, caller: UserId) -> TodoResult<()> {
            let mut todos = self.todos.lock().unwrap();
            let todo = todos
                .iter()
                .find(|t| t.id == todo_id)
                .ok_or(TodoError::NotFound)?;
            if todo.user_id != caller {
                return Err(TodoError::NotOwner);
            }
            todos.retain(|t| t.id != todo_id);
            Ok(())
        }
    }

    const ANN: UserId = Id::new(1);
    const BOB: UserId = Id::new(2);

    #[tokio::test]
    async fn test_create_and_list() {
        let store = Arc::new(MemTodoStore::default());
        let create = CreateTodoUseCase::new(Arc::clone(&store));
        create.execute("Buy milk", ANN).await.unwrap();
        create.execute("Walk the dog", ANN).await.unwrap();
        create.execute("Bob's errand", BOB).await.unwrap();

        let list = ListTodosUseCase::new(Arc::clone(&store));
        let anns = list.execute(ANN).await.unwrap();
        assert_eq!(anns.len(), 2);
        assert_eq!(anns[0].content, "Buy milk");
        assert_eq!(anns[1].content, "Walk the dog");

        let bobs = list.execute(BOB).await.unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].content, "Bob's errand");
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = Arc::new(MemTodoStore::default());
        let id = CreateTodoUseCase::new(Arc::clone(&store))
            .execute("Buy milk", ANN)
            .await
            .unwrap();

        let todo = GetTodoUseCase::new(Arc::clone(&store))
            .execute(id, ANN)
            .await
            .unwrap();
        assert_eq!(todo.id, id);
        assert_eq!(todo.content, "Buy milk");
        assert_eq!(todo.user_id, ANN);
    }

    #[tokio::test]
    async fn test_empty_content_creates_no_row() {
        let store = Arc::new(MemTodoStore::default());
        let create = CreateTodoUseCase::new(Arc::clone(&store));
        let err = create.execute("   ", ANN).await.unwrap_err();
        assert!(matches!(err, TodoError::EmptyContent));
        assert!(store.todos.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_own_todo() {
        let store = Arc::new(MemTodoStore::default());
        let id = CreateTodoUseCase::new(Arc::clone(&store))
            .execute("Buy milk", ANN)
            .await
            .unwrap();

        UpdateTodoUseCase::new(Arc::clone(&store))
            .execute(id, "Buy oat milk", ANN)
            .await
            .unwrap();

        let todo = GetTodoUseCase::new(Arc::clone(&store))
            .execute(id, ANN)
            .await
            .unwrap();
        assert_eq!(todo.content, "Buy oat milk");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_content() {
        let store = Arc::new(MemTodoStore::default());
        let id = CreateTodoUseCase::new(Arc::clone(&store))
            .execute("Buy milk", ANN)
            .await
            .unwrap();

        let err = UpdateTodoUseCase::new(Arc::clone(&store))
            .execute(id, "", ANN)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::EmptyContent));

        let todo = GetTodoUseCase::new(Arc::clone(&store))
            .execute(id, ANN)
            .await
            .unwrap();
        assert_eq!(todo.content, "Buy milk");
    }

    #[tokio::test]
    async fn test_cross_user_access_denied() {
        let store = Arc::new(MemTodoStore::default());
        let id = CreateTodoUseCase::new(Arc::clone(&store))
            .execute("Ann's secret", ANN)
            .await
            .unwrap();

        let get = GetTodoUseCase::new(Arc::clone(&store))
            .execute(id, BOB)
            .await
            .unwrap_err();
        assert!(matches!(get, TodoError::NotOwner));

        let update = UpdateTodoUseCase::new(Arc::clone(&store))
            .execute(id, "Bob was here", BOB)
            .await
            .unwrap_err();
        assert!(matches!(update, TodoError::NotOwner));

        let delete = DeleteTodoUseCase::new(Arc::clone(&store))
            .execute(id, BOB)
            .await
            .unwrap_err();
        assert!(matches!(delete, TodoError::NotOwner));

        // Ann's row is untouched
        let todo = GetTodoUseCase::new(Arc::clone(&store))
            .execute(id, ANN)
            .await
            .unwrap();
        assert_eq!(todo.content, "Ann's secret");
    }

    #[tokio::test]
    async fn test_missing_todo_is_not_found() {
        let store = Arc::new(MemTodoStore::default());
        let err = GetTodoUseCase::new(Arc::clone(&store))
            .execute(Id::new(999), ANN)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));

        let err = DeleteTodoUseCase::new(Arc::clone(&store))
            .execute(Id::new(999), ANN)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = Arc::new(MemTodoStore::default());
        let id = CreateTodoUseCase::new(Arc::clone(&store))
            .execute("Buy milk", ANN)
            .await
            .unwrap();

        DeleteTodoUseCase::new(Arc::clone(&store))
            .execute(id, ANN)
            .await
            .unwrap();

        let list = ListTodosUseCase::new(Arc::clone(&store))
            .execute(ANN)
            .await
            .unwrap();
        assert!(list.is_empty());
    }
}
