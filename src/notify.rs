//! Transient toast notifications.

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info};
use uuid::Uuid;

/// How long a toast stays up unless closed earlier.
pub const TOAST_DURATION_MS: i64 = 3000;

/// Older toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
            expires_at: Utc::now() + Duration::milliseconds(TOAST_DURATION_MS),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Resolves after `ms` milliseconds.
pub async fn sleep_ms(ms: i64) {
    let ms = ms.max(0) as u64;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    items: Vec<Notification>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!("toast: {}", notification.title),
            NotificationKind::Error => error!("toast: {} - {}", notification.title, notification.description),
        }
        self.prune(Utc::now());
        self.items.push(notification);
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(0..excess);
        }
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The success and failure messages of each user action.
pub mod messages {
    use super::Notification;
    use crate::error::ApiError;

    pub fn event_created() -> Notification {
        Notification::success("Event created.", "We've created your event successfully!")
    }

    pub fn create_failed(_err: &ApiError) -> Notification {
        Notification::error("Error", "Oooops, something went wrong while creating your event")
    }

    pub fn event_updated() -> Notification {
        Notification::success("Event updated.", "The event has been successfully updated.")
    }

    pub fn update_failed(err: &ApiError) -> Notification {
        Notification::error(
            "Error updating event.",
            err.user_message("An error occurred while updating the event."),
        )
    }

    pub fn event_deleted() -> Notification {
        Notification::success("Event deleted.", "Sadly, this event is no more.")
    }

    pub fn delete_failed(err: &ApiError) -> Notification {
        Notification::error(
            "Error deleting event.",
            err.user_message("Failed to delete event."),
        )
    }

    pub fn load_failed(what: &str, err: &ApiError) -> Notification {
        Notification::error(format!("Could not load {}.", what), err.to_string())
    }
}
