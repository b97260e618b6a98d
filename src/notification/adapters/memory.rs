//! Recording notification sink for tests.

use crate::notification::{domain::Notification, ports::NotificationSink};
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe sink that keeps every delivered notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications delivered so far.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
