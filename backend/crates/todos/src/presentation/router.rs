//! Todo router assembly.
//!
//! The returned router is mounted under `/todos` by the application,
//! behind the auth crate's `require_session` guard.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use platform::render::TemplateRenderer;

use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoStore;
use crate::presentation::handlers::{
    TodoAppState, delete, edit_form, index, new_form, save, update,
};

/// Build the todo router backed by Postgres.
pub fn todos_router(store: PgTodoStore, pages: Arc<dyn TemplateRenderer>) -> Router {
    todos_router_generic(Arc::new(store), pages)
}

/// Build the todo router over any repository implementation.
pub fn todos_router_generic<R>(repo: Arc<R>, pages: Arc<dyn TemplateRenderer>) -> Router
where
    R: TodoRepository + Send + Sync + 'static,
{
    let state = TodoAppState { repo, pages };

    Router::new()
        .route("/", get(index::<R>))
        .route("/new", get(new_form::<R>))
        .route("/save", post(save::<R>))
        .route("/edit/{id}", get(edit_form::<R>))
        .route("/update/{id}", post(update::<R>))
        .route("/delete/{id}", post(delete::<R>))
        .with_state(state)
}
