//! Password hashing with Argon2id.
//!
//! Hashing is CPU-bound, so both operations run on tokio's blocking pool rather
//! than on a request's async task.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hash error: {0}")]
    Hash(String),
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes a plaintext password into a PHC string with a fresh random salt.
pub async fn hash_password(plain: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| PasswordError::Hash(e.to_string()))?;
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::Hash(e.to_string()))
    })
    .await?
}

/// Checks a plaintext password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub async fn verify_password(plain: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|e| PasswordError::Hash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_not_plaintext_and_verifies() -> Result<(), PasswordError> {
        let hash = hash_password("q1w2e3r4!".to_string()).await?;

        assert_ne!(hash, "q1w2e3r4!");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("q1w2e3r4!".to_string(), hash.clone()).await?);
        assert!(!verify_password("wrong-password".to_string(), hash).await?);

        Ok(())
    }

    #[tokio::test]
    async fn same_password_hashes_differently() -> Result<(), PasswordError> {
        let first = hash_password("q1w2e3r4!".to_string()).await?;
        let second = hash_password("q1w2e3r4!".to_string()).await?;

        assert_ne!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let result = verify_password("q1w2e3r4!".to_string(), "not-a-hash".to_string()).await;

        assert!(matches!(result, Err(PasswordError::Hash(_))));
    }
}
