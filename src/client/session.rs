//! Session state machine.
//!
//! ARCHITECTURE
//! ============
//! Session state is an explicit, serializable struct mutated only by a pure
//! reducer. A single dispatch task consumes events from an mpsc channel and
//! publishes each next state atomically through a watch channel, so any
//! number of readers observe whole transitions and never a partial update.
//! Durable-storage side effects (persist/clear the token) happen in the
//! dispatch task, next to the transition that requires them.
//!
//! INVARIANT
//! =========
//! `is_authenticated == Some(true)` implies `identity` is populated; the
//! reducer cannot produce a state that violates this.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

use crate::services::user::Identity;

use super::alert::{AlertBus, AlertKind};
use super::api::{ApiClient, ClientError};
use super::storage::TokenStore;

// =============================================================================
// STATE
// =============================================================================

/// Client-held session state. `is_authenticated` is tri-state: `None` until
/// the first identity lookup resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub is_authenticated: Option<bool>,
    pub loading: bool,
    pub identity: Option<Identity>,
}

impl SessionState {
    /// Startup state, seeded from whatever durable storage held.
    #[must_use]
    pub fn initial(token: Option<String>) -> Self {
        Self { token, is_authenticated: None, loading: true, identity: None }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.is_authenticated {
            Some(true) => SessionPhase::Authenticated,
            Some(false) => SessionPhase::Unauthenticated,
            None => SessionPhase::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// One completed server exchange, applied as an atomic state replacement.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Identity lookup succeeded.
    UserLoaded(Identity),
    /// Identity lookup failed or no token was available.
    AuthError,
    /// Register or login returned a token. Authentication is not assumed
    /// from the token alone; a follow-up lookup settles it.
    AuthSuccess { token: String },
    /// Explicit user action.
    LoggedOut,
}

/// Pure transition function: (current state, event) -> next state.
#[must_use]
pub fn reduce(state: &SessionState, event: &SessionEvent) -> SessionState {
    let next = match event {
        SessionEvent::UserLoaded(identity) => SessionState {
            token: state.token.clone(),
            is_authenticated: Some(true),
            loading: false,
            identity: Some(identity.clone()),
        },
        SessionEvent::AuthError | SessionEvent::LoggedOut => SessionState {
            token: None,
            is_authenticated: Some(false),
            loading: false,
            identity: None,
        },
        SessionEvent::AuthSuccess { token } => SessionState {
            token: Some(token.clone()),
            is_authenticated: state.is_authenticated,
            // The follow-up identity lookup is about to run.
            loading: true,
            identity: state.identity.clone(),
        },
    };
    debug_assert!(
        !(next.is_authenticated == Some(true) && next.identity.is_none()),
        "authenticated state requires an identity"
    );
    next
}

// =============================================================================
// STORE
// =============================================================================

/// Single-writer session store. Only the dispatch task mutates state; any
/// number of views read it via [`SessionStore::subscribe`].
pub struct SessionStore {
    tx: mpsc::UnboundedSender<SessionEvent>,
    state: watch::Receiver<SessionState>,
    api: ApiClient,
    alerts: AlertBus,
}

impl SessionStore {
    /// Build the store, seeding state from durable storage, and spawn the
    /// dispatch task. Callers normally follow up with
    /// [`SessionStore::load_user`] to resolve the seeded token.
    #[must_use]
    pub fn new(api: ApiClient, storage: Arc<dyn TokenStore>) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionState::initial(storage.load()));
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match &event {
                    SessionEvent::AuthSuccess { token } => {
                        if let Err(e) = storage.save(token) {
                            tracing::warn!(error = %e, "failed to persist session token");
                        }
                    }
                    SessionEvent::AuthError | SessionEvent::LoggedOut => {
                        if let Err(e) = storage.clear() {
                            tracing::warn!(error = %e, "failed to clear session token");
                        }
                    }
                    SessionEvent::UserLoaded(_) => {}
                }
                state_tx.send_modify(|state| *state = reduce(state, &event));
            }
        });

        Self { tx, state: state_rx, api, alerts: AlertBus::new() }
    }

    /// Queue an event for the dispatch task.
    pub fn dispatch(&self, event: SessionEvent) {
        let _ = self.tx.send(event);
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Watch handle for observing state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    #[must_use]
    pub fn alerts(&self) -> &AlertBus {
        &self.alerts
    }

    // =========================================================================
    // ACTIONS — each resolves to exactly one success or failure event, so no
    // exchange leaves `loading` dangling.
    // =========================================================================

    /// Attempt the identity lookup with the current token.
    pub async fn load_user(&self) {
        let token = self.current().token;
        self.load_user_with(token.as_deref()).await;
    }

    async fn load_user_with(&self, token: Option<&str>) {
        let Some(token) = token else {
            self.dispatch(SessionEvent::AuthError);
            return;
        };
        match self.api.me(token).await {
            Ok(identity) => self.dispatch(SessionEvent::UserLoaded(identity)),
            Err(_) => self.dispatch(SessionEvent::AuthError),
        }
    }

    /// Authenticate, persist the returned token, then re-validate via the
    /// identity lookup.
    pub async fn login(&self, email: &str, password: &str) {
        match self.api.login(email, password).await {
            Ok(token) => {
                self.dispatch(SessionEvent::AuthSuccess { token: token.clone() });
                self.load_user_with(Some(&token)).await;
            }
            Err(e) => self.surface(e),
        }
    }

    /// Register, persist the returned token, then re-validate via the
    /// identity lookup.
    pub async fn register(&self, name: &str, email: &str, password: &str) {
        match self.api.register(name, email, password).await {
            Ok(token) => {
                self.dispatch(SessionEvent::AuthSuccess { token: token.clone() });
                self.load_user_with(Some(&token)).await;
            }
            Err(e) => self.surface(e),
        }
    }

    /// Explicit logout: clear the durable token and drop to unauthenticated.
    pub fn logout(&self) {
        self.dispatch(SessionEvent::LoggedOut);
    }

    /// Surface a rejected exchange as alerts. Session state is unchanged:
    /// a failed register/login never tears down an existing session.
    fn surface(&self, err: ClientError) {
        match err {
            ClientError::Rejected(errors) => {
                for field in errors {
                    self.alerts.push(&field.msg, AlertKind::Danger);
                }
            }
            other => {
                tracing::warn!(error = %other, "auth request failed");
                self.alerts.push("Something went wrong, please try again", AlertKind::Danger);
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
