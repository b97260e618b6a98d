//! Polls a deployment job until it resolves.

use super::CancellationSignal;
use crate::deployment::{
    domain::{
        DeploymentDomainError, DeploymentJob, DeploymentJobId, DeploymentPhase, DeploymentTracker,
        StatusReport,
    },
    ports::{MetadataGateway, MetadataGatewayError, PollTimer},
};
use mockable::Clock;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Pause between consecutive status queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Polling configuration.
///
/// # Examples
///
/// ```
/// use cmdt_table::deployment::services::{DEFAULT_POLL_INTERVAL, PollerConfig};
/// use std::num::NonZeroU32;
///
/// let config = PollerConfig::default();
/// assert_eq!(config.interval, DEFAULT_POLL_INTERVAL);
/// assert!(config.max_status_checks.is_none());
///
/// let bounded = PollerConfig::default().with_max_status_checks(NonZeroU32::new(30));
/// assert_eq!(bounded.max_status_checks.map(NonZeroU32::get), Some(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Pause between status queries.
    pub interval: Duration,
    /// Upper bound on status queries; `None` polls until resolution.
    pub max_status_checks: Option<NonZeroU32>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_status_checks: None,
        }
    }
}

impl PollerConfig {
    /// Sets the pause between status queries.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the status-check limit.
    #[must_use]
    pub const fn with_max_status_checks(mut self, max_status_checks: Option<NonZeroU32>) -> Self {
        self.max_status_checks = max_status_checks;
        self
    }
}

/// Service-level errors raised while polling.
///
/// A failing status query aborts the loop; the job's last known status is
/// left unresolved.
#[derive(Debug, Error)]
pub enum DeploymentPollError {
    /// The status query failed.
    #[error(transparent)]
    Gateway(#[from] MetadataGatewayError),
    /// The tracking state machine rejected a transition.
    #[error(transparent)]
    Domain(#[from] DeploymentDomainError),
}

/// Terminal result of tracking a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    phase: DeploymentPhase,
    job: DeploymentJob,
}

impl PollOutcome {
    /// Returns the terminal phase.
    #[must_use]
    pub const fn phase(&self) -> DeploymentPhase {
        self.phase
    }

    /// Returns the job as last observed.
    #[must_use]
    pub const fn job(&self) -> &DeploymentJob {
        &self.job
    }

    /// Returns `true` when the deployment succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.phase == DeploymentPhase::Succeeded
    }

    /// Returns `true` when the job never needed a status query.
    #[must_use]
    pub const fn was_untracked(&self) -> bool {
        self.job.id().is_none()
    }
}

/// Tracks submitted jobs to a terminal phase.
#[derive(Clone)]
pub struct DeploymentPoller<G, T, C>
where
    G: MetadataGateway,
    T: PollTimer,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    timer: Arc<T>,
    clock: Arc<C>,
    config: PollerConfig,
}

impl<G, T, C> DeploymentPoller<G, T, C>
where
    G: MetadataGateway,
    T: PollTimer,
    C: Clock + Send + Sync,
{
    /// Creates a new poller.
    #[must_use]
    pub const fn new(gateway: Arc<G>, timer: Arc<T>, clock: Arc<C>, config: PollerConfig) -> Self {
        Self {
            gateway,
            timer,
            clock,
            config,
        }
    }

    /// Returns the polling configuration.
    #[must_use]
    pub const fn config(&self) -> PollerConfig {
        self.config
    }

    /// Tracks a job to a terminal phase.
    ///
    /// # Errors
    ///
    /// See [`DeploymentPoller::track_with`].
    pub async fn track(
        &self,
        job: DeploymentJob,
        cancellation: &CancellationSignal,
    ) -> Result<PollOutcome, DeploymentPollError> {
        self.track_with(job, cancellation, |_| {}).await
    }

    /// Tracks a job to a terminal phase, reporting each applied response.
    ///
    /// Jobs without an identifier succeed without any status query. Otherwise
    /// the status is queried, and while it stays unresolved the loop waits
    /// for the configured interval before querying again. No query is issued
    /// after the first resolved status. Both the query and the wait end early
    /// when `cancellation` fires, yielding [`DeploymentPhase::Abandoned`]; the
    /// callback is never invoked after that.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentPollError::Gateway`] when a status query fails.
    pub async fn track_with<F>(
        &self,
        job: DeploymentJob,
        cancellation: &CancellationSignal,
        mut on_report: F,
    ) -> Result<PollOutcome, DeploymentPollError>
    where
        F: FnMut(&DeploymentJob) + Send,
    {
        let job_id = job.id().cloned();
        let mut tracker = DeploymentTracker::new();
        tracker.submit(job)?;
        if cancellation.is_cancelled() {
            tracker.abandon()?;
            return finish(tracker);
        }
        if tracker.start_polling(&*self.clock)?.is_terminal() {
            debug!("deployment returned no job id; treating as complete");
            return finish(tracker);
        }
        let Some(job_id) = job_id else {
            return Err(DeploymentDomainError::NoJob.into());
        };

        loop {
            let Some(report) = self.query(&job_id, cancellation).await? else {
                tracker.abandon()?;
                return finish(tracker);
            };
            let phase = tracker.observe(&report, &*self.clock)?;
            if let Some(observed) = tracker.job() {
                debug!(
                    job_id = %job_id,
                    status = %observed.status(),
                    attempt = observed.status_checks(),
                    "deployment status checked"
                );
                on_report(observed);
            }
            if phase.is_terminal() {
                info!(job_id = %job_id, phase = %phase, "deployment resolved");
                return finish(tracker);
            }
            if self.limit_reached(&tracker) {
                warn!(job_id = %job_id, "deployment status-check limit reached");
                tracker.time_out()?;
                return finish(tracker);
            }
            if !self.pause(cancellation).await {
                tracker.abandon()?;
                return finish(tracker);
            }
        }
    }

    async fn query(
        &self,
        job_id: &DeploymentJobId,
        cancellation: &CancellationSignal,
    ) -> Result<Option<StatusReport>, DeploymentPollError> {
        tokio::select! {
            biased;
            () = cancellation.cancelled() => Ok(None),
            response = self.gateway.query_deploy_status(job_id) => {
                let report = response.inspect_err(|err| {
                    warn!(job_id = %job_id, error = %err, "deployment status query failed");
                })?;
                Ok(Some(report))
            }
        }
    }

    /// Returns `false` when cancelled during the pause.
    async fn pause(&self, cancellation: &CancellationSignal) -> bool {
        tokio::select! {
            biased;
            () = cancellation.cancelled() => false,
            () = self.timer.wait(self.config.interval) => true,
        }
    }

    fn limit_reached(&self, tracker: &DeploymentTracker) -> bool {
        match (self.config.max_status_checks, tracker.job()) {
            (Some(limit), Some(job)) => job.status_checks() >= limit.get(),
            _ => false,
        }
    }
}

fn finish(tracker: DeploymentTracker) -> Result<PollOutcome, DeploymentPollError> {
    let phase = tracker.phase();
    let job = tracker.into_job().ok_or(DeploymentDomainError::NoJob)?;
    Ok(PollOutcome { phase, job })
}
