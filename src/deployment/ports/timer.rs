//! Timer port for the pause between status polls.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the poll loop between status queries.
///
/// Implementations must yield to other tasks while waiting rather than block
/// the thread.
#[async_trait]
pub trait PollTimer: Send + Sync {
    /// Waits for the given interval.
    async fn wait(&self, interval: Duration);
}
