use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use super::errors::AuthError;

/// One-way password hashing with argon2id. Verification reads the cost
/// parameters from the stored PHC string, so hashes made with different
/// parameters keep verifying.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl CredentialHasher {
    /// argon2id with `memory_kib` of memory and the default time and
    /// parallelism costs.
    pub fn with_memory_cost(memory_kib: u32) -> Result<Self, AuthError> {
        let params = Params::new(
            memory_kib,
            Params::DEFAULT_T_COST,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plain password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// A malformed stored hash never verifies.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self.argon2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
pub(crate) fn fast_hasher() -> CredentialHasher {
    CredentialHasher::with_memory_cost(1024).expect("valid argon2 params")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_and_is_not_plaintext() {
        let hasher = fast_hasher();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2"));
        assert!(hasher.verify("hunter2", &hash));
        assert!(!hasher.verify("hunter3", &hash));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = fast_hasher();
        let a = hasher.hash("secret").unwrap();
        let b = hasher.hash("secret").unwrap();

        assert_ne!(a, b);
        assert!(hasher.verify("secret", &a));
        assert!(hasher.verify("secret", &b));
    }

    #[test]
    fn test_memory_cost_is_recorded_in_hash() {
        let hasher = CredentialHasher::with_memory_cost(2048).unwrap();
        let hash = hasher.hash("secret").unwrap();

        assert!(hash.contains("m=2048"));
        assert!(CredentialHasher::default().verify("secret", &hash));
    }

    #[test]
    fn test_memory_cost_below_argon2_minimum_is_rejected() {
        let result = CredentialHasher::with_memory_cost(1);
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("secret", "not-a-phc-string"));
        assert!(!hasher.verify("secret", ""));
    }
}
