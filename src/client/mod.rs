//! Client-side session layer.
//!
//! ARCHITECTURE
//! ============
//! The consumer half of the crate: a typed REST client ([`api::ApiClient`]),
//! durable token storage ([`storage::TokenStore`]), and a session state
//! machine ([`session::SessionStore`]) built as a pure reducer behind a
//! single-writer dispatch channel. Views read the current state through a
//! watch channel and never observe a half-applied transition.

pub mod alert;
pub mod api;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ClientError};
pub use session::{SessionEvent, SessionPhase, SessionState, SessionStore, reduce};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
