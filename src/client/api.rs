//! Typed REST client for the DevConnect API.
//!
//! DESIGN
//! ======
//! The token is attached explicitly per outgoing call; there is no ambient
//! default header, so a stale token can never leak into a request after
//! logout.

use serde::Serialize;

use crate::routes::auth::{TOKEN_HEADER, TokenResponse};
use crate::routes::error::FieldError;
use crate::services::user::Identity;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the input; one entry per violated field.
    #[error("request rejected: {0:?}")]
    Rejected(Vec<FieldError>),
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status {0}")]
    Unexpected(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorList {
    errors: Vec<FieldError>,
}

/// Map a non-success response into a [`ClientError`].
fn rejection_from_parts(status: u16, body: &str) -> ClientError {
    if status == 401 {
        return ClientError::Unauthorized;
    }
    if status == 400 {
        if let Ok(list) = serde_json::from_str::<ErrorList>(body) {
            return ClientError::Rejected(list.errors);
        }
    }
    ClientError::Unexpected(status)
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// `GET /api/auth` — resolve the token's identity.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] when the token is missing from the
    /// server's point of view or rejected; transport errors pass through.
    pub async fn me(&self, token: &str) -> Result<Identity, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/auth", self.base_url))
            .header(TOKEN_HEADER, token)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection_from_parts(status, &body));
        }
        Ok(resp.json::<Identity>().await?)
    }

    /// `POST /api/auth` — authenticate and fetch a token.
    ///
    /// # Errors
    ///
    /// [`ClientError::Rejected`] carries the server's field errors,
    /// including the uniform invalid-credentials entry.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/auth", self.base_url))
            .json(&LoginBody { email, password })
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection_from_parts(status, &body));
        }
        Ok(resp.json::<TokenResponse>().await?.token)
    }

    /// `POST /api/users` — register and fetch a token.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`ApiClient::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(&RegisterBody { name, email, password })
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection_from_parts(status, &body));
        }
        Ok(resp.json::<TokenResponse>().await?.token)
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
