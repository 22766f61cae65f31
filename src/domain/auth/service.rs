use std::sync::Arc;

use crate::models::{NewUser, User};
use crate::store::{Store, StoreError};

use super::commands::{Login, Register};
use super::errors::AuthError;
use super::password::CredentialHasher;

// ============================================================================
// Auth Service
// ============================================================================
//
// Emails are trimmed and lower-cased before storage and lookup. Argon2 work
// runs on the blocking pool so request workers are not stalled.
//
// ============================================================================

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    hasher: CredentialHasher,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    pub async fn register(&self, command: Register) -> Result<User, AuthError> {
        let email = normalize_email(&required(command.email, "email")?);
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail(email));
        }
        let password = required(command.password, "password")?;

        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        let user = match self.store.insert_user(NewUser { email, password_hash }).await {
            Ok(user) => user,
            Err(StoreError::UniqueViolation(_)) => return Err(AuthError::EmailTaken),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Succeeds only when the email is known and the password verifies
    /// against the stored hash.
    pub async fn login(&self, command: Login) -> Result<User, AuthError> {
        let email = normalize_email(&required(command.email, "email")?);
        let password = required(command.password, "password")?;

        let Some(user) = self.store.find_user_by_email(&email).await? else {
            tracing::warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let stored_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        if !verified {
            tracing::warn!(user_id = user.id, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "Login succeeded");
        Ok(user)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AuthError> {
    let value = value.ok_or(AuthError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(AuthError::EmptyField(field));
    }
    Ok(value)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::password::fast_hasher;
    use crate::store::{test_store, UnavailableStore};

    fn register(email: &str, password: &str) -> Register {
        Register {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login(email: &str, password: &str) -> Login {
        Login {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    async fn service() -> AuthService {
        AuthService::new(test_store().await, fast_hasher())
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service().await;

        let user = service.register(register("a@b.com", "correct")).await.unwrap();
        assert_ne!(user.password_hash, "correct");

        let logged_in = service.login(login("a@b.com", "correct")).await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let service = service().await;
        service.register(register("a@b.com", "correct")).await.unwrap();

        let err = service.login(login("a@b.com", "wrong")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_is_indistinguishable_from_wrong_password() {
        let service = service().await;
        service.register(register("a@b.com", "correct")).await.unwrap();

        let unknown = service.login(login("nobody@b.com", "correct")).await.unwrap_err();
        let wrong = service.login(login("a@b.com", "wrong")).await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_email_is_normalized() {
        let service = service().await;
        service.register(register("  Someone@Example.COM ", "pw")).await.unwrap();

        assert!(service.login(login("someone@example.com", "pw")).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let service = service().await;
        service.register(register("a@b.com", "one")).await.unwrap();

        let err = service.register(register("A@B.com", "two")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_missing_fields_fail_validation() {
        let service = service().await;

        let err = service
            .login(Login {
                email: Some("a@b.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingField("password")));
        assert!(err.is_validation());

        let err = service.login(login("", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmptyField("email")));

        let err = service.register(register("not-an-email", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = AuthService::new(Arc::new(UnavailableStore), fast_hasher());

        let err = service.login(login("a@b.com", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));
        assert!(!err.is_validation());
    }
}
