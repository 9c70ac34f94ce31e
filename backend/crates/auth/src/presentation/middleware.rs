//! Session middleware.
//!
//! Two layers are provided: `check_session` resolves the cookie into an
//! [`AuthStatus`] extension without blocking anonymous visitors, and
//! `require_session` guards protected routes, redirecting to /login when
//! no valid session is attached to the request.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use kernel::principal::AuthStatus;
use platform::cookie::extract_cookie;

use crate::application::{check_session::CheckSessionUseCase, config::AuthConfig};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;

/// Shared state for the session middleware.
pub struct AuthMiddlewareState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Attach an [`AuthStatus`] extension to every request.
///
/// A missing, expired, or otherwise invalid cookie yields an anonymous
/// status. Store failures are logged and also degrade to anonymous so
/// public pages stay reachable.
pub async fn check_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let principal = match extract_cookie(req.headers(), &state.config.cookie.name) {
        Some(token) => {
            let use_case =
                CheckSessionUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
            match use_case.resolve_principal(&token).await {
                Ok(principal) => Some(principal),
                Err(err) => {
                    if matches!(err, AuthError::Database(_) | AuthError::Internal(_)) {
                        err.log();
                    }
                    None
                }
            }
        }
        None => None,
    };

    req.extensions_mut().insert(AuthStatus { principal });
    next.run(req).await
}

/// Reject requests that do not carry a valid session.
///
/// On success the resolved [`kernel::principal::Principal`] is inserted
/// as a request extension for downstream handlers. Invalid or expired
/// sessions redirect to /login; store failures surface as errors.
pub async fn require_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let Some(token) = extract_cookie(req.headers(), &state.config.cookie.name) else {
        return Redirect::to("/login").into_response();
    };

    let use_case = CheckSessionUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    match use_case.resolve_principal(&token).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err @ (AuthError::Database(_) | AuthError::Internal(_))) => {
            err.log();
            err.into_response()
        }
        Err(err) => {
            tracing::debug!(error = %err, "session rejected");
            Redirect::to("/login").into_response()
        }
    }
}
