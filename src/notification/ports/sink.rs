//! Notification sink port.

use crate::notification::domain::Notification;

/// Receives notifications emitted by the table.
///
/// Delivery is fire-and-forget: a sink must not fail or block, so the
/// notification path can never itself raise an error.
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}
