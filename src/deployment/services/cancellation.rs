//! Cooperative cancellation for the poll loop.

use tokio::sync::watch;

/// Owner side of a cancellation channel.
///
/// Cancelling is permanent: every current and future [`CancellationSignal`]
/// observes it.
#[derive(Debug)]
pub struct PollCancellation {
    sender: watch::Sender<bool>,
}

impl Default for PollCancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl PollCancellation {
    /// Creates an uncancelled channel.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self { sender }
    }

    /// Returns a signal observing this channel.
    #[must_use]
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            receiver: self.sender.subscribe(),
        }
    }

    /// Cancels every observer.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` once [`PollCancellation::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

/// Observer side of a cancellation channel.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    receiver: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// Returns a signal that is never cancelled.
    #[must_use]
    pub fn never() -> Self {
        let (_sender, receiver) = watch::channel(false);
        Self { receiver }
    }

    /// Returns `true` when cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Completes once cancellation is requested.
    ///
    /// If the owner is dropped without cancelling, this never completes.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
