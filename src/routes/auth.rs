//! Auth routes — token-gated identity lookup and login.
//!
//! ARCHITECTURE
//! ============
//! The [`AuthUser`] extractor is the authentication middleware: it runs
//! before any handler that names it as a parameter and rejects the request
//! outright when the token header is missing or fails verification. No
//! failure path falls through to the handler body.

use axum::extract::{FromRef, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::password::verify_password;
use crate::services::user::{Identity, normalize_email};
use crate::state::AppState;

use super::error::ApiError;
use super::validate::validate_login;

/// Request header carrying the raw token string. No cookie transport.
pub const TOKEN_HEADER: &str = "x-access-token";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated subject resolved from the token header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub id: Uuid,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::NoToken);
        }

        let app_state = AppState::from_ref(state);
        let id = app_state.tokens.verify(token).map_err(|_| ApiError::InvalidToken)?;

        Ok(Self { id })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `GET /api/auth` — return the caller's identity, password hash omitted.
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Identity>, ApiError> {
    let identity = state
        .store
        .find_by_id(auth.id)
        .await?
        // Valid signature over a subject that no longer exists: the account
        // was deleted after issuance.
        .ok_or(ApiError::InvalidToken)?;
    Ok(Json(identity))
}

/// `POST /api/auth` — authenticate credentials and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let errors = validate_login(&body.email, &body.password);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    // Validation guarantees the email normalizes.
    let email = normalize_email(&body.email).ok_or(ApiError::InvalidCredentials)?;

    let Some(stored) = state.store.find_by_email(&email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    let matches = verify_password(&body.password, &stored.password_hash)?;
    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(stored.id)?;
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
