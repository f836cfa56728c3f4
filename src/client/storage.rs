//! Durable token storage.
//!
//! The token string is the only persisted session artifact. It lives under a
//! single well-known key, read once at application startup.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Well-known storage key for the session token.
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;
    /// Persist the token.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing storage is unwritable.
    fn save(&self, token: &str) -> io::Result<()>;
    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing storage is unwritable.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed store: the token lives in `<dir>/token`.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { path: dir.join(TOKEN_KEY) }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_owned())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory store for tests and short-lived processes.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { inner: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").clone()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.inner.lock().expect("token store poisoned") = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.inner.lock().expect("token store poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
