//! Transient user-visible alerts.
//!
//! Validation and credential failures surface here as dismissable entries
//! with a fixed display duration; views observe the list through a watch
//! channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use uuid::Uuid;

/// Fixed display duration before an alert removes itself.
pub const ALERT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Alert {
    pub id: Uuid,
    pub msg: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Success,
}

/// Shared alert list. Cloning hands out another handle to the same list.
#[derive(Clone)]
pub struct AlertBus {
    tx: Arc<watch::Sender<Vec<Alert>>>,
}

impl AlertBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx: Arc::new(tx) }
    }

    /// Append an alert and schedule its removal after [`ALERT_TTL`].
    /// Requires a running Tokio runtime.
    pub fn push(&self, msg: &str, kind: AlertKind) -> Uuid {
        let id = Uuid::new_v4();
        let alert = Alert { id, msg: msg.to_owned(), kind };
        self.tx.send_modify(|alerts| alerts.push(alert));

        let tx = Arc::clone(&self.tx);
        tokio::spawn(async move {
            tokio::time::sleep(ALERT_TTL).await;
            tx.send_modify(|alerts| alerts.retain(|a| a.id != id));
        });
        id
    }

    /// Dismiss an alert before its TTL elapses.
    pub fn remove(&self, id: Uuid) {
        self.tx.send_modify(|alerts| alerts.retain(|a| a.id != id));
    }

    #[must_use]
    pub fn current(&self) -> Vec<Alert> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Alert>> {
        self.tx.subscribe()
    }
}

impl Default for AlertBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "alert_test.rs"]
mod tests;
