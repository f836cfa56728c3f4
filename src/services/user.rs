//! Identity persistence — the credential store adapter.
//!
//! ARCHITECTURE
//! ============
//! Route handlers talk to a [`CredentialStore`] trait object rather than to
//! Postgres directly, keeping storage internals opaque to the auth core.
//! [`PgCredentialStore`] is the production implementation. The stored
//! password hash never leaves this module in a serializable form.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Public view of a registered user. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Internal row including the password hash. Deliberately not serializable.
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
}

impl StoredIdentity {
    #[must_use]
    pub fn into_identity(self) -> Identity {
        Identity { id: self.id, name: self.name, email: self.email, avatar_url: self.avatar_url }
    }
}

/// Fields required to create an identity. The password arrives pre-hashed.
#[derive(Debug)]
pub struct NewIdentity {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The email column's unique index rejected the insert. Under concurrent
    /// registration exactly one caller wins; the rest land here.
    #[error("email already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Opaque persistence interface consumed by the auth handlers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredIdentity>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError>;
    async fn create_identity(&self, new: NewIdentity) -> Result<StoredIdentity, StoreError>;
    /// Explicit account deletion. Owned profile/post rows cascade with it.
    async fn delete_identity(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Normalize an email for lookup and storage: trimmed, lowercased, and
/// shaped like `local@domain`. Returns `None` when malformed.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Derive a deterministic gravatar-style avatar URL from the email digest.
#[must_use]
pub fn avatar_url(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_ascii_lowercase().as_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("https://www.gravatar.com/avatar/{hex}?s=200&r=pg&d=mm")
}

/// Postgres-backed credential store.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredIdentity>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, avatar_url FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StoredIdentity {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            password_hash: r.get("password_hash"),
            avatar_url: r.get("avatar_url"),
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError> {
        let row = sqlx::query("SELECT id, name, email, avatar_url FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| Identity {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            avatar_url: r.get("avatar_url"),
        }))
    }

    async fn create_identity(&self, new: NewIdentity) -> Result<StoredIdentity, StoreError> {
        let row = sqlx::query(
            r"INSERT INTO users (name, email, password_hash, avatar_url)
              VALUES ($1, $2, $3, $4)
              RETURNING id",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            other => StoreError::Db(other),
        })?;

        Ok(StoredIdentity {
            id: row.get("id"),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            avatar_url: Some(new.avatar_url),
        })
    }

    async fn delete_identity(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
