//! PostgreSQL Repository Implementation
//!
//! Ownership is enforced in SQL: mutations match on both id and
//! user_id, and a miss is followed by a bare-id probe to tell a
//! missing row apart from someone else's row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::todo::{NewTodo, Todo};
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};
use kernel::id::{Id, TodoId, UserId};

/// PostgreSQL-backed todo store
///
/// Constructed once with an injected pool and cloned into every
/// component that needs persistence; there is no global handle.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinguish `NotFound` from `NotOwner` after an ownership-scoped
    /// mutation matched zero rows.
    async fn classify_miss(&self, todo_id: TodoId) -> TodoError {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM todos WHERE id = $1)")
                .bind(todo_id.value())
                .fetch_one(&self.pool)
                .await;

        match exists {
            Ok(true) => TodoError::NotOwner,
            Ok(false) => TodoError::NotFound,
            Err(err) => TodoError::Database(err),
        }
    }
}

impl TodoRepository for PgTodoStore {
    async fn create(&self, todo: &NewTodo) -> TodoResult<TodoId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO todos (content, user_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&todo.content)
        .bind(todo.user_id.value())
        .bind(todo.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Id::new(id))
    }

    async fn find_by_id(&self, todo_id: TodoId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, content, user_id, created_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(todo_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn find_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, content, user_id, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn update(&self, todo_id: TodoId, content: &str, caller: UserId) -> TodoResult<()> {
        let updated = sqlx::query("UPDATE todos SET content = $3 WHERE id = $1 AND user_id = $2")
            .bind(todo_id.value())
            .bind(caller.value())
            .bind(content)
            .execute(&self.pool)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(self.classify_miss(todo_id).await);
        }

        Ok(())
    }

    async fn delete(&self, todo_id: TodoId, caller: UserId) -> TodoResult<()> {
        let deleted = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(todo_id.value())
            .bind(caller.value())
            .execute(&self.pool)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(self.classify_miss(todo_id).await);
        }

        Ok(())
    }
}

/// Database row for todos table
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    content: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: Id::new(self.id),
            content: self.content,
            user_id: Id::new(self.user_id),
            created_at: self.created_at,
        }
    }
}
