//! Password hashing and verification.
//!
//! TRADE-OFFS
//! ==========
//! Bcrypt is intentionally expensive; the cost factor below keeps a login
//! attempt in the tens of milliseconds while staying resistant to offline
//! cracking. Hashing runs inline on the request task and is not parallelized.

use bcrypt::{hash, verify};

const HASH_COST: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password. A fresh random salt is generated per call.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if bcrypt fails.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    Ok(hash(plaintext, HASH_COST)?)
}

/// Check a plaintext password against a stored hash.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if the stored hash is not parseable.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    Ok(verify(plaintext, stored_hash)?)
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
