//! Application services for deployment submission and tracking.

mod cancellation;
mod poller;
mod submitter;

pub use cancellation::{CancellationSignal, PollCancellation};
pub use poller::{
    DEFAULT_POLL_INTERVAL, DeploymentPollError, DeploymentPoller, PollOutcome, PollerConfig,
};
pub use submitter::{DeploymentSubmitError, DeploymentSubmitter};
