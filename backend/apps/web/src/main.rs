//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod pages;

use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use auth::{AuthConfig, AuthMiddlewareState, PgAuthStore, auth_router, check_session,
    require_session};
use axum::{
    Extension, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use kernel::principal::AuthStatus;
use platform::render::TemplateRenderer;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use todos::{PgTodoStore, todos_router};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::pages::Pages;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Server configuration from environment
struct WebConfig {
    port: u16,
    database_url: String,
    static_dir: String,
    log_file: Option<String>,
}

impl WebConfig {
    fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .ok()
            .map(|raw| raw.parse::<u16>().context("PORT must be a number"))
            .transpose()?
            .unwrap_or(8080);

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_file = env::var("LOG_FILE").ok();

        Ok(Self {
            port,
            database_url,
            static_dir,
            log_file,
        })
    }
}

fn init_tracing(log_file: Option<&str>) -> anyhow::Result<()> {
    let file_layer = log_file
        .map(|path| -> anyhow::Result<_> {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {path}"))?;
            Ok(tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)))
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "web=info,auth=info,todos=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

/// GET /
///
/// Landing page; authenticated visitors go straight to their list.
async fn top(
    State(pages): State<Arc<dyn TemplateRenderer>>,
    Extension(status): Extension<AuthStatus>,
) -> AppResult<Response> {
    if status.authenticated() {
        return Ok(Redirect::to("/todos").into_response());
    }
    let body = pages
        .render("top", &Value::Null)
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(Html(body).into_response())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = WebConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_store = PgAuthStore::new(pool.clone());
    let todo_store = PgTodoStore::new(pool.clone());

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    match auth::domain::repository::SessionRepository::cleanup_expired(&auth_store).await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let auth_config = Arc::new(AuthConfig::default());
    let pages: Arc<dyn TemplateRenderer> = Arc::new(Pages);

    // Session middleware state, shared by the landing page and the guard
    let session_state = AuthMiddlewareState {
        repo: Arc::new(auth_store.clone()),
        config: Arc::clone(&auth_config),
    };

    let top_routes = {
        let state = session_state.clone();
        Router::new()
            .route("/", get(top))
            .layer(middleware::from_fn(move |req: Request, next: Next| {
                let state = state.clone();
                async move { check_session(state, req, next).await }
            }))
            .with_state(Arc::clone(&pages))
    };

    let todo_routes = {
        let state = session_state.clone();
        todos_router(todo_store, Arc::clone(&pages)).layer(middleware::from_fn(
            move |req: Request, next: Next| {
                let state = state.clone();
                async move { require_session(state, req, next).await }
            },
        ))
    };

    // Build router
    let app = Router::new()
        .merge(top_routes)
        .merge(auth_router(
            auth_store,
            Arc::clone(&auth_config),
            Arc::clone(&pages),
        ))
        .nest("/todos", todo_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
