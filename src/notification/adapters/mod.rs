//! Adapter implementations for notification delivery.

pub mod memory;
pub mod tracing;

pub use memory::RecordingNotificationSink;
pub use self::tracing::TracingNotificationSink;
