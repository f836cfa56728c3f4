//! Token issuance and verification.
//!
//! ARCHITECTURE
//! ============
//! Identity tokens are stateless HS256 JWTs binding a subject id to a fixed
//! 12-hour lifetime. Nothing is persisted server-side; expiry is the only
//! invalidation mechanism. The signing secret is loaded once at startup and
//! never logged.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Fixed token lifetime.
pub const TOKEN_TTL: Duration = Duration::hours(12);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Malformed, bad signature, or expired. Verification is all-or-nothing.
    #[error("invalid token")]
    Invalid,
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("JWT_SECRET is not set")]
    MissingSecret,
}

/// Claims payload. `user.id` carries the subject, matching the wire shape
/// the API has always used.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user: Subject,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Subject {
    id: Uuid,
}

/// Signs and verifies identity tokens. Pure function of key + clock.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Load the signing secret from `JWT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MissingSecret`] if the variable is unset.
    pub fn from_env() -> Result<Self, TokenError> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| TokenError::MissingSecret)?;
        Ok(Self::new(&secret))
    }

    /// Issue a signed token for the given subject with the fixed lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if encoding fails.
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, TOKEN_TTL)
    }

    pub(crate) fn issue_with_ttl(&self, subject: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            user: Subject { id: subject },
            iat: now,
            exp: now + ttl.whole_seconds(),
        };
        Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token and return its subject id.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for anything short of a well-formed,
    /// correctly signed, unexpired token.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry: no clock leeway.
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;
        Ok(data.claims.user.id)
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
