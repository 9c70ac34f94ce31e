//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::session::{NewSession, Session};
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use kernel::id::{Id, UserId};
use platform::password::HashedPassword;

/// PostgreSQL-backed user and session store
///
/// Constructed once with an injected pool and cloned into every
/// component that needs persistence; there is no global handle.
#[derive(Clone)]
pub struct PgAuthStore {
    pool: PgPool,
}

impl PgAuthStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint race on `users.email` to the same error the
/// pre-insert existence check produces.
fn map_create_user_err(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AuthError::EmailTaken;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthStore {
    async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (
                uuid,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user.uuid)
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_create_user_err)?;

        Ok(Id::new(id))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, uuid, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        // First match by id order; email is unique at the store so at
        // most one row exists
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, uuid, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user_id: UserId, name: &str, email: &Email) -> AuthResult<()> {
        let updated = sqlx::query("UPDATE users SET name = $2, email = $3 WHERE id = $1")
            .bind(user_id.value())
            .bind(name)
            .bind(email.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> AuthResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthStore {
    async fn create(&self, session: &NewSession) -> AuthResult<Session> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (
                token,
                email,
                user_id,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id, token, email, user_id, created_at, expires_at
            "#,
        )
        .bind(session.token)
        .bind(&session.email)
        .bind(session.user_id.value())
        .bind(session.created_at)
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_session())
    }

    async fn find_by_token(&self, token: Uuid) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, token, email, user_id, created_at, expires_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete_by_token(&self, token: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at < $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    uuid: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(User {
            id: Id::new(self.id),
            uuid: self.uuid,
            name: self.name,
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    token: Uuid,
    email: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: Id::new(self.id),
            token: self.token,
            email: self.email,
            user_id: Id::new(self.user_id),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}
