//! Transient notification channel.
//!
//! Cart actions are confirmed with a short-lived message. The channel holds
//! at most one notification; publishing a new one replaces the old one and
//! cancels its pending expiry. Each notification clears itself after
//! [`NOTIFICATION_TTL`] via a scheduled tokio task.
//!
//! Nothing here is persisted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A notification request, before it is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }
}

/// A published notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

#[derive(Default)]
struct Slot {
    active: Option<Notification>,
    expiry: Option<JoinHandle<()>>,
    generation: u64,
}

/// Single-slot, replace-on-write notification holder.
///
/// Cloning shares the slot.
#[derive(Clone)]
pub struct NotificationChannel {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl NotificationChannel {
    /// A channel using [`NOTIFICATION_TTL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    /// Publish `notice`, replacing the active notification.
    ///
    /// Must be called from within a tokio runtime.
    pub fn publish(&self, notice: Notice) -> Notification {
        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.ttl).unwrap_or_else(|_| chrono::Duration::zero());
        let notification = Notification {
            message: notice.message,
            kind: notice.kind,
            expires_at,
        };

        let mut slot = lock(&self.slot);
        if let Some(previous) = slot.expiry.take() {
            previous.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);
        slot.active = Some(notification.clone());

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let ttl = self.ttl;
        slot.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&shared);
            // A newer notification owns the slot if the generation moved on
            if slot.generation == generation {
                slot.active = None;
                slot.expiry = None;
                tracing::debug!("Notification expired");
            }
        }));

        tracing::debug!(kind = ?notification.kind, message = %notification.message, "Notification published");
        notification
    }

    /// The active notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        lock(&self.slot).active.clone()
    }

    /// Clear the active notification and cancel its expiry.
    pub fn dismiss(&self) {
        let mut slot = lock(&self.slot);
        if let Some(expiry) = slot.expiry.take() {
            expiry.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);
        slot.active = None;
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("active", &self.current())
            .field("ttl", &self.ttl)
            .finish()
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
