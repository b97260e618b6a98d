//! Poll timer adapters.

use crate::deployment::ports::PollTimer;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Timer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPollTimer;

#[async_trait]
impl PollTimer for TokioPollTimer {
    async fn wait(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}

/// Timer that returns immediately and records each requested interval.
///
/// Lets tests drive the poll loop without wall-clock delays.
#[derive(Debug, Clone, Default)]
pub struct RecordingPollTimer {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPollTimer {
    /// Creates a timer with no recorded waits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every interval waited so far.
    #[must_use]
    pub fn waits(&self) -> Vec<Duration> {
        self.waits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PollTimer for RecordingPollTimer {
    async fn wait(&self, interval: Duration) {
        self.waits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(interval);
        tokio::task::yield_now().await;
    }
}
