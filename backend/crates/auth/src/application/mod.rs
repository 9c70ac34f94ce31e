//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod profile;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use profile::{DeleteAccountUseCase, UpdateProfileUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    };

    use chrono::{Duration, Utc};
    use kernel::id::{Id, UserId};
    use uuid::Uuid;

    use crate::application::check_session::CheckSessionUseCase;
    use crate::application::config::AuthConfig;
    use crate::application::profile::{DeleteAccountUseCase, UpdateProfileUseCase};
    use crate::application::sign_in::{SignInInput, SignInUseCase};
    use crate::application::sign_out::SignOutUseCase;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::domain::entity::session::{NewSession, Session};
    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::repository::{SessionRepository, UserRepository};
    use crate::domain::value_object::email::Email;
    use crate::error::{AuthError, AuthResult};

    /// In-memory store double implementing both repository traits.
    #[derive(Default)]
    struct MemAuthStore {
        users: Mutex<Vec<User>>,
        sessions: Mutex<Vec<Session>>,
        user_seq: AtomicI64,
        session_seq: AtomicI64,
    }

    impl UserRepository for MemAuthStore {
        async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(AuthError::EmailTaken);
            }
            let id = Id::new(self.user_seq.fetch_add(1, Ordering::SeqCst) + 1);
            users.push(User {
                id,
                uuid: user.uuid,
                name: user.name.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                created_at: user.created_at,
            });
            Ok(id)
        }

        async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.email == email).cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| &u.email == email))
        }

        async fn update(&self, user_id: UserId, name: &str, email: &Email) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or(AuthError::UserNotFound)?;
            user.name = name.to_string();
            user.email = email.clone();
            Ok(())
        }

        async fn delete(&self, user_id: UserId) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            users.retain(|u| u.id != user_id);
            let mut sessions = self.sessions.lock().unwrap();
            sessions.retain(|s| s.user_id != user_id);
            Ok(())
        }
    }

    impl SessionRepository for MemAuthStore {
        async fn create(&self, session: &NewSession) -> AuthResult<Session> {
            let id = Id::new(self.session_seq.fetch_add(1, Ordering::SeqCst) + 1);
            let record = Session {
                id,
                token: session.token,
                email: session.email.clone(),
                user_id: session.user_id,
                created_at: session.created_at,
                expires_at: session.expires_at,
            };
            self.sessions.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_by_token(&self, token: Uuid) -> AuthResult<Option<Session>> {
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions.iter().find(|s| s.token == token).cloned())
        }

        async fn delete_by_token(&self, token: Uuid) -> AuthResult<()> {
            let mut sessions = self.sessions.lock().unwrap();
            sessions.retain(|s| s.token != token);
            Ok(())
        }

        async fn cleanup_expired(&self) -> AuthResult<u64> {
            let now = Utc::now();
            let mut sessions = self.sessions.lock().unwrap();
            let before = sessions.len();
            sessions.retain(|s| s.expires_at >= now);
            Ok((before - sessions.len()) as u64)
        }
    }

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::default())
    }

    async fn signup(store: &Arc<MemAuthStore>, name: &str, email: &str, password: &str) -> UserId {
        let use_case = SignUpUseCase::new(Arc::clone(store), config());
        use_case
            .execute(SignUpInput {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap()
            .user_id
    }

    async fn login(store: &Arc<MemAuthStore>, email: &str, password: &str) -> Uuid {
        let use_case = SignInUseCase::new(Arc::clone(store), Arc::clone(store), config());
        use_case
            .execute(SignInInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap()
            .session
            .token
    }

    #[tokio::test]
    async fn test_signup_stores_digest_not_cleartext() {
        let store = Arc::new(MemAuthStore::default());
        signup(&store, "Ann", "ann@example.com", "secret").await;

        let users = store.users.lock().unwrap();
        let phc = users[0].password_hash.as_phc_string();
        assert_ne!(phc, "secret");
        assert!(phc.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let store = Arc::new(MemAuthStore::default());
        signup(&store, "Ann", "ann@example.com", "secret").await;

        let use_case = SignUpUseCase::new(Arc::clone(&store), config());
        let err = use_case
            .execute(SignUpInput {
                name: "Other Ann".to_string(),
                email: "ann@example.com".to_string(),
                password: "different".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(store.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_signup_rejects_blank_name() {
        let store = Arc::new(MemAuthStore::default());
        let use_case = SignUpUseCase::new(Arc::clone(&store), config());
        let err = use_case
            .execute(SignUpInput {
                name: "   ".to_string(),
                email: "ann@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert!(store.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let store = Arc::new(MemAuthStore::default());
        signup(&store, "Ann", "ann@example.com", "secret").await;

        let use_case = SignInUseCase::new(Arc::clone(&store), Arc::clone(&store), config());
        let wrong_password = use_case
            .execute(SignInInput {
                email: "ann@example.com".to_string(),
                password: "not-secret".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));

        let unknown_email = use_case
            .execute(SignInInput {
                email: "bob@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert!(store.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_valid_until_logout() {
        let store = Arc::new(MemAuthStore::default());
        let user_id = signup(&store, "Ann", "ann@example.com", "secret").await;
        let token = login(&store, "ann@example.com", "secret").await;

        let check = CheckSessionUseCase::new(Arc::clone(&store), Arc::clone(&store));
        let principal = check.resolve_principal(&token.to_string()).await.unwrap();
        assert_eq!(principal.user_id, user_id);
        assert_eq!(principal.email, "ann@example.com");
        assert_eq!(principal.name, "Ann");

        SignOutUseCase::new(Arc::clone(&store))
            .execute(&token.to_string())
            .await
            .unwrap();
        assert!(!check.is_valid(&token.to_string()).await);
    }

    #[tokio::test]
    async fn test_logout_deletes_exactly_one_session() {
        let store = Arc::new(MemAuthStore::default());
        signup(&store, "Ann", "ann@example.com", "secret").await;
        let first = login(&store, "ann@example.com", "secret").await;
        let second = login(&store, "ann@example.com", "secret").await;
        assert_ne!(first, second);

        SignOutUseCase::new(Arc::clone(&store))
            .execute(&first.to_string())
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(Arc::clone(&store), Arc::clone(&store));
        assert!(!check.is_valid(&first.to_string()).await);
        assert!(check.is_valid(&second.to_string()).await);
    }

    #[tokio::test]
    async fn test_logout_with_unknown_token_is_idempotent() {
        let store = Arc::new(MemAuthStore::default());
        SignOutUseCase::new(Arc::clone(&store))
            .execute(&Uuid::new_v4().to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_deleted() {
        let store = Arc::new(MemAuthStore::default());
        signup(&store, "Ann", "ann@example.com", "secret").await;
        let token = login(&store, "ann@example.com", "secret").await;

        {
            let mut sessions = store.sessions.lock().unwrap();
            sessions[0].expires_at = Utc::now() - Duration::seconds(5);
        }

        let check = CheckSessionUseCase::new(Arc::clone(&store), Arc::clone(&store));
        let err = check
            .resolve_principal(&token.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
        // lazy delete removed the stale row
        assert!(store.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile() {
        let store = Arc::new(MemAuthStore::default());
        let user_id = signup(&store, "Ann", "ann@example.com", "secret").await;

        UpdateProfileUseCase::new(Arc::clone(&store))
            .execute(user_id, "Ann B.", "ann.b@example.com")
            .await
            .unwrap();

        let users = store.users.lock().unwrap();
        assert_eq!(users[0].name, "Ann B.");
        assert_eq!(users[0].email.as_str(), "ann.b@example.com");
    }

    #[tokio::test]
    async fn test_delete_account_invalidates_sessions() {
        let store = Arc::new(MemAuthStore::default());
        let user_id = signup(&store, "Ann", "ann@example.com", "secret").await;
        let token = login(&store, "ann@example.com", "secret").await;

        DeleteAccountUseCase::new(Arc::clone(&store))
            .execute(user_id)
            .await
            .unwrap();

        assert!(store.users.lock().unwrap().is_empty());
        let check = CheckSessionUseCase::new(Arc::clone(&store), Arc::clone(&store));
        assert!(!check.is_valid(&token.to_string()).await);
    }

    #[tokio::test]
    async fn test_malformed_token_rejected() {
        let store = Arc::new(MemAuthStore::default());
        let check = CheckSessionUseCase::new(Arc::clone(&store), Arc::clone(&store));
        assert!(!check.is_valid("not-a-uuid").await);
    }
}
