//! HTTP handlers for signup, login, and logout.
//!
//! All pages are server-rendered HTML. Failed signups and failed logins
//! redirect back to the corresponding form, mirroring a classic
//! post/redirect/get flow. Only unexpected failures (store or hashing
//! errors) surface as an error page.

use std::sync::Arc;

use axum::{
    Extension, Form,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
};
use kernel::principal::AuthStatus;
use platform::render::TemplateRenderer;
use serde_json::Value;

use crate::application::{
    config::AuthConfig,
    sign_in::{SignInInput, SignInUseCase},
    sign_out::SignOutUseCase,
    sign_up::{SignUpInput, SignUpUseCase},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginForm, SignupForm};

/// Shared state for the authentication handlers.
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub pages: Arc<dyn TemplateRenderer>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
            pages: Arc::clone(&self.pages),
        }
    }
}

/// GET /signup
///
/// Authenticated visitors are sent straight to their todo list.
pub async fn signup_page<R>(
    State(state): State<AuthAppState<R>>,
    Extension(status): Extension<AuthStatus>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    if status.authenticated() {
        return Ok(Redirect::to("/todos").into_response());
    }
    let body = state.pages.render("signup", &Value::Null)?;
    Ok(Html(body).into_response())
}

/// POST /signup
pub async fn signup_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<SignupForm>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
    let input = SignUpInput {
        name: form.name,
        email: form.email,
        password: form.password,
    };
    match use_case.execute(input).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err @ (AuthError::Validation(_) | AuthError::EmailTaken)) => {
            tracing::debug!(error = %err, "signup rejected");
            Ok(Redirect::to("/signup").into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /login
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    Extension(status): Extension<AuthStatus>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    if status.authenticated() {
        return Ok(Redirect::to("/todos").into_response());
    }
    let body = state.pages.render("login", &Value::Null)?;
    Ok(Html(body).into_response())
}

/// POST /authenticate
///
/// On success a session row is created and its token is handed to the
/// browser in the session cookie. Bad credentials land back on the
/// login form without revealing whether the email exists.
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );
    let input = SignInInput {
        email: form.email,
        password: form.password,
    };
    match use_case.execute(input).await {
        Ok(output) => {
            let mut cookie = state.config.cookie.clone();
            cookie.max_age_secs = Some(state.config.session_ttl.as_secs() as i64);
            let header =
                platform::cookie::set_cookie_header(&cookie, &output.session.token.to_string());
            Ok(([(SET_COOKIE, header)], Redirect::to("/")).into_response())
        }
        Err(err @ (AuthError::InvalidCredentials | AuthError::Validation(_))) => {
            tracing::debug!(error = %err, "login rejected");
            Ok(Redirect::to("/login").into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /logout
///
/// Deletes the session row when a cookie is present and always clears
/// the cookie, so a stale or already-deleted token still signs out.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.cookie.name) {
        let use_case = SignOutUseCase::new(Arc::clone(&state.repo));
        if let Err(err) = use_case.execute(&token).await {
            err.log();
        }
    }
    let header = state.config.cookie.build_delete_cookie();
    Ok(([(SET_COOKIE, header)], Redirect::to("/login")).into_response())
}
