//! Error taxonomy and HTTP translation.
//!
//! DESIGN
//! ======
//! Domain errors are caught at the handler boundary and translated to a JSON
//! payload with an appropriate status code. Statuses are deliberately
//! uniform: 400 for anything the caller sent wrong, 401 for auth, 500 for
//! the unexpected. Unexpected failures are logged server-side and surfaced
//! without internals.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::services::password::PasswordError;
use crate::services::token::TokenError;
use crate::services::user::StoreError;

/// One violated field, mirroring the API's historical error array shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    #[must_use]
    pub fn new(msg: &str, param: &str) -> Self {
        Self { msg: msg.to_owned(), param: Some(param.to_owned()) }
    }

    #[must_use]
    pub fn bare(msg: &str) -> Self {
        Self { msg: msg.to_owned(), param: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed input; every violated field is reported together.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    /// Identical for unknown email and wrong password, so a caller cannot
    /// probe which accounts exist.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    DuplicateUser,
    #[error("no token provided")]
    NoToken,
    #[error("token rejected")]
    InvalidToken,
    #[error("internal error")]
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => Self::DuplicateUser,
            StoreError::Db(db) => {
                tracing::error!(error = %db, "credential store failure");
                Self::Internal
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Invalid => Self::InvalidToken,
            other => {
                tracing::error!(error = %other, "token service failure");
                Self::Internal
            }
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        tracing::error!(error = %e, "password hashing failure");
        Self::Internal
    }
}

#[derive(Serialize)]
struct ErrorList {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorMessage {
    msg: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorList { errors })).into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorList { errors: vec![FieldError::bare("Invalid credentials")] }),
            )
                .into_response(),
            Self::DuplicateUser => (
                StatusCode::BAD_REQUEST,
                Json(ErrorList { errors: vec![FieldError::bare("User already exists")] }),
            )
                .into_response(),
            Self::NoToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorMessage { msg: "No token, authorization denied" }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorMessage { msg: "Token is not valid" }),
            )
                .into_response(),
            Self::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorMessage { msg: "Server error" }))
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
