//! Password hashing
//!
//! Stored hashes are PHC strings (`$argon2id$v=19$...`), so parameters and
//! salt travel with the hash.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),
    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),
}

/// Stand-in hash verified when no stored hash exists for a login
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("workforce-unknown-login").ok());

/// Hash a plaintext password with a random salt
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Check a plaintext password against a stored hash
///
/// A mismatch is `Ok(false)`; only a hash that cannot be parsed is an error.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::InvalidHash(e.to_string())),
    }
}

/// Spend one verification on a hash nothing can match
///
/// Used when the login is unknown so the rejection takes as long as a wrong
/// password.
pub fn verify_dummy_password(plaintext: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(plaintext, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "plaintext-from-old-system"),
            Err(PasswordError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_dummy_hash_is_verifiable() {
        let hash = DUMMY_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!verify_password("correct horse", hash).unwrap());
        verify_dummy_password("correct horse");
    }
}
