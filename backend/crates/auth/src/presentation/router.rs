//! Authentication router assembly.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use platform::render::TemplateRenderer;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthStore;
use crate::presentation::handlers::{
    AuthAppState, authenticate, login_page, logout, signup_page, signup_submit,
};
use crate::presentation::middleware::{AuthMiddlewareState, check_session};

/// Build the authentication router backed by Postgres.
pub fn auth_router(
    store: PgAuthStore,
    config: Arc<AuthConfig>,
    pages: Arc<dyn TemplateRenderer>,
) -> Router {
    auth_router_generic(Arc::new(store), config, pages)
}

/// Build the authentication router over any repository implementation.
///
/// The session-check middleware runs on every auth route so the form
/// pages can bounce already-authenticated visitors to /todos.
pub fn auth_router_generic<R>(
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    pages: Arc<dyn TemplateRenderer>,
) -> Router
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::clone(&repo),
        config: Arc::clone(&config),
        pages,
    };
    let mw_state = AuthMiddlewareState { repo, config };

    Router::new()
        .route("/signup", get(signup_page::<R>).post(signup_submit::<R>))
        .route("/login", get(login_page::<R>))
        .route("/authenticate", post(authenticate::<R>))
        .route("/logout", get(logout::<R>))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let state = mw_state.clone();
            async move { check_session(state, req, next).await }
        }))
        .with_state(state)
}
