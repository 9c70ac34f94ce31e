//! HTTP handlers for the todo pages.
//!
//! Every handler reads the authenticated [`Principal`] extension
//! attached by the session guard; there is no way to reach these
//! routes anonymously. Path ids must be plain decimal digits, anything
//! else is treated as a missing row.

use std::sync::Arc;

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use kernel::principal::Principal;
use platform::render::TemplateRenderer;
use serde_json::json;

use crate::application::{
    CreateTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodosUseCase, UpdateTodoUseCase,
};
use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};
use crate::presentation::dto::TodoForm;
use kernel::id::TodoId;

/// Shared state for the todo handlers.
pub struct TodoAppState<R> {
    pub repo: Arc<R>,
    pub pages: Arc<dyn TemplateRenderer>,
}

impl<R> Clone for TodoAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            pages: Arc::clone(&self.pages),
        }
    }
}

/// Parse a path id. Only plain decimal digits are accepted; anything
/// else maps to `NotFound` rather than a parse error page.
fn parse_todo_id(raw: &str) -> TodoResult<TodoId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TodoError::NotFound);
    }
    raw.parse::<i64>()
        .map(TodoId::new)
        .map_err(|_| TodoError::NotFound)
}

fn todo_json(todo: &Todo) -> serde_json::Value {
    json!({
        "id": todo.id.value(),
        "content": todo.content,
    })
}

/// GET /todos
pub async fn index<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = ListTodosUseCase::new(Arc::clone(&state.repo))
        .execute(principal.user_id)
        .await?;

    let data = json!({
        "user": { "name": principal.name },
        "todos": todos.iter().map(todo_json).collect::<Vec<_>>(),
    });
    let body = state.pages.render("index", &data)?;
    Ok(Html(body).into_response())
}

/// GET /todos/new
pub async fn new_form<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let data = json!({ "user": { "name": principal.name } });
    let body = state.pages.render("todo_new", &data)?;
    Ok(Html(body).into_response())
}

/// POST /todos/save
pub async fn save<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
    Form(form): Form<TodoForm>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let use_case = CreateTodoUseCase::new(Arc::clone(&state.repo));
    match use_case.execute(&form.content, principal.user_id).await {
        Ok(_) => Ok(Redirect::to("/todos").into_response()),
        Err(TodoError::EmptyContent) => {
            tracing::debug!("empty todo rejected");
            Ok(Redirect::to("/todos/new").into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /todos/edit/{id}
pub async fn edit_form<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_todo_id(&id)?;
    let todo = GetTodoUseCase::new(Arc::clone(&state.repo))
        .execute(todo_id, principal.user_id)
        .await?;

    let data = json!({
        "user": { "name": principal.name },
        "todo": todo_json(&todo),
    });
    let body = state.pages.render("todo_edit", &data)?;
    Ok(Html(body).into_response())
}

/// POST /todos/update/{id}
pub async fn update<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Form(form): Form<TodoForm>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_todo_id(&id)?;
    let use_case = UpdateTodoUseCase::new(Arc::clone(&state.repo));
    match use_case
        .execute(todo_id, &form.content, principal.user_id)
        .await
    {
        Ok(()) => Ok(Redirect::to("/todos").into_response()),
        Err(TodoError::EmptyContent) => {
            tracing::debug!(todo_id = %todo_id, "empty todo update rejected");
            Ok(Redirect::to(&format!("/todos/edit/{todo_id}")).into_response())
        }
        Err(err) => Err(err),
    }
}

/// POST /todos/delete/{id}
pub async fn delete<R>(
    State(state): State<TodoAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> TodoResult<Response>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_todo_id(&id)?;
    DeleteTodoUseCase::new(Arc::clone(&state.repo))
        .execute(todo_id, principal.user_id)
        .await?;
    Ok(Redirect::to("/todos").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_todo_id_digits_only() {
        assert!(parse_todo_id("42").is_ok());
        assert!(matches!(parse_todo_id(""), Err(TodoError::NotFound)));
        assert!(matches!(parse_todo_id("-1"), Err(TodoError::NotFound)));
        assert!(matches!(parse_todo_id("12abc"), Err(TodoError::NotFound)));
        assert!(matches!(parse_todo_id("1.5"), Err(TodoError::NotFound)));
        // overflow maps to NotFound, not a 500
        assert!(matches!(
            parse_todo_id("99999999999999999999999"),
            Err(TodoError::NotFound)
        ));
    }
}
