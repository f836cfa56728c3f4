//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON REST endpoints under `/api` with CORS and request tracing.
//! Every protected route names the `AuthUser` extractor, so authentication
//! runs strictly before any handler body.

pub mod auth;
pub mod error;
pub mod users;
pub mod validate;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/users", axum::routing::post(users::register).delete(users::delete_account))
        .route("/api/auth", get(auth::me).post(auth::login))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// TEST HELPERS
// =============================================================================
