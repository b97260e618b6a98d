//! Notification sink that writes to `tracing`.

use crate::notification::{
    domain::{Notification, Severity},
    ports::NotificationSink,
};

/// Sink that logs notifications for hosts without a toast surface.
///
/// Errors are logged at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        let message = notification.message().unwrap_or_default();
        match notification.severity() {
            Severity::Error => tracing::warn!(
                severity = %notification.severity(),
                title = notification.title(),
                body = message,
                "notification"
            ),
            Severity::Info | Severity::Success => tracing::info!(
                severity = %notification.severity(),
                title = notification.title(),
                body = message,
                "notification"
            ),
        }
    }
}
