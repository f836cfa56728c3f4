//! User routes — registration and account deletion.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::password::hash_password;
use crate::services::user::{NewIdentity, avatar_url, normalize_email};
use crate::state::AppState;

use super::auth::{AuthUser, TokenResponse};
use super::error::ApiError;
use super::validate::validate_register;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/users` — register a new identity and issue a token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let errors = validate_register(&body.name, &body.email, &body.password);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let email = normalize_email(&body.email).ok_or(ApiError::InvalidCredentials)?;

    if state.store.find_by_email(&email).await?.is_some() {
        return Err(ApiError::DuplicateUser);
    }

    let password_hash = hash_password(&body.password)?;
    let created = state
        .store
        .create_identity(NewIdentity {
            name: body.name.trim().to_owned(),
            avatar_url: avatar_url(&email),
            email,
            password_hash,
        })
        // The unique index settles the race when two registrations for the
        // same email pass the pre-check together.
        .await?;

    let token = state.tokens.issue(created.id)?;
    Ok(Json(TokenResponse { token }))
}

/// `DELETE /api/users` — delete the caller's account. Owned profile and post
/// rows cascade with it.
pub async fn delete_account(State(state): State<AppState>, auth: AuthUser) -> Result<StatusCode, ApiError> {
    state.store.delete_identity(auth.id).await?;
    tracing::info!(user_id = %auth.id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
