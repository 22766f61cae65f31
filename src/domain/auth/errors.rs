use crate::store::StoreError;

// ============================================================================
// Auth Errors
// ============================================================================
//
// `InvalidCredentials` covers both an unknown email and a wrong password.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingField(_) | AuthError::EmptyField(_) | AuthError::InvalidEmail(_)
        )
    }
}
