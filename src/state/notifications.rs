//! Timed, stacked, auto-dismissing user-visible notifications
//!
//! The queue is the one session-wide entry point for user messaging:
//! the form pipeline and every other widget call the same
//! [`NotificationQueue::notify`]. Each notification carries its own
//! dismiss deadline, so a later toast never extends or shortens an
//! earlier one's lifetime.

use crate::sanitize::sanitize;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a notification stays on screen by default
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Maximum number of concurrently shown notifications; when full, the
/// oldest undismissed one is evicted first.
pub const DEFAULT_CAPACITY: usize = 5;

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Danger,
}

/// Opaque handle for dismissing a queued notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(Uuid);

/// A queued user-visible message
#[derive(Debug, Clone)]
pub struct Notification {
    pub handle: NotificationHandle,
    /// Display text, already passed through the sanitization boundary
    pub text: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub dismiss_after: Duration,
    shown_at: Instant,
}

impl Notification {
    /// Time this notification has been on screen
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.age(now) >= self.dismiss_after
    }
}

/// Stacked notifications in arrival order, most recent last
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    capacity: usize,
    dismiss_after: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_DISMISS_AFTER)
    }
}

impl NotificationQueue {
    pub fn new(capacity: usize, dismiss_after: Duration) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
            dismiss_after,
        }
    }

    /// Queue a message for display. When the queue is full the oldest
    /// undismissed notification is evicted first.
    pub fn notify(&mut self, text: &str, severity: Severity) -> NotificationHandle {
        if self.items.len() >= self.capacity {
            let evicted = self.items.remove(0);
            tracing::debug!(
                text = %evicted.text,
                created_at = %evicted.created_at,
                "evicting oldest notification"
            );
        }

        let handle = NotificationHandle(Uuid::new_v4());
        self.items.push(Notification {
            handle,
            text: sanitize(text),
            severity,
            created_at: Utc::now(),
            dismiss_after: self.dismiss_after,
            shown_at: Instant::now(),
        });
        handle
    }

    /// Remove a notification before its deadline. Dismissing a handle
    /// that is no longer queued is a no-op.
    pub fn dismiss(&mut self, handle: NotificationHandle) {
        self.items.retain(|n| n.handle != handle);
    }

    /// Drop every notification whose own deadline has passed, returning
    /// how many were removed. Called on each event-loop tick.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
