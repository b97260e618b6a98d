//! Deployment tracking state machine.

use super::{DeploymentDomainError, DeploymentJob, DeploymentPhase, DeploymentStatus, StatusReport};
use mockable::Clock;

/// Drives a single deployment job through its phases.
///
/// `Idle → Submitted → Polling → {Succeeded | Failed | Aborted}`, with jobs
/// lacking an identifier moving straight from `Submitted` to `Succeeded`.
/// Status fields are only updated while `Polling`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTracker {
    phase: DeploymentPhase,
    job: Option<DeploymentJob>,
}

impl Default for DeploymentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DeploymentPhase::Idle,
            job: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DeploymentPhase {
        self.phase
    }

    /// Returns the tracked job.
    #[must_use]
    pub const fn job(&self) -> Option<&DeploymentJob> {
        self.job.as_ref()
    }

    /// Consumes the tracker, returning the tracked job.
    #[must_use]
    pub fn into_job(self) -> Option<DeploymentJob> {
        self.job
    }

    /// Records a successful submit.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::InvalidPhaseTransition`] unless the
    /// tracker is idle.
    pub fn submit(&mut self, job: DeploymentJob) -> Result<(), DeploymentDomainError> {
        self.transition_to(DeploymentPhase::Submitted)?;
        self.job = Some(job);
        Ok(())
    }

    /// Leaves `Submitted`.
    ///
    /// Jobs with an identifier start polling. Jobs without one are already
    /// resolved and succeed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::InvalidPhaseTransition`] unless the
    /// tracker is in `Submitted`.
    pub fn start_polling(
        &mut self,
        clock: &impl Clock,
    ) -> Result<DeploymentPhase, DeploymentDomainError> {
        let has_id = self
            .job
            .as_ref()
            .ok_or(DeploymentDomainError::NoJob)?
            .id()
            .is_some();
        if has_id {
            self.transition_to(DeploymentPhase::Polling)?;
        } else {
            self.transition_to(DeploymentPhase::Succeeded)?;
            if let Some(untracked) = self.job.as_mut() {
                untracked.complete_without_tracking(clock);
            }
        }
        Ok(self.phase)
    }

    /// Applies a status response while polling.
    ///
    /// The tracker leaves `Polling` as soon as the job's status is resolved;
    /// any other status keeps it polling.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::InvalidPhaseTransition`] when the
    /// tracker is not polling.
    pub fn observe(
        &mut self,
        report: &StatusReport,
        clock: &impl Clock,
    ) -> Result<DeploymentPhase, DeploymentDomainError> {
        if self.phase != DeploymentPhase::Polling {
            return Err(DeploymentDomainError::InvalidPhaseTransition {
                from: self.phase,
                to: DeploymentPhase::Polling,
            });
        }
        let job = self.job.as_mut().ok_or(DeploymentDomainError::NoJob)?;
        job.apply_report(report, clock);
        let resolved = match job.status() {
            DeploymentStatus::Succeeded => Some(DeploymentPhase::Succeeded),
            DeploymentStatus::Failed => Some(DeploymentPhase::Failed),
            DeploymentStatus::Aborted => Some(DeploymentPhase::Aborted),
            _ => None,
        };
        if let Some(terminal) = resolved {
            self.transition_to(terminal)?;
        }
        Ok(self.phase)
    }

    /// Stops polling because the status-check limit was reached.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::InvalidPhaseTransition`] when the
    /// tracker is not polling.
    pub fn time_out(&mut self) -> Result<DeploymentPhase, DeploymentDomainError> {
        self.transition_to(DeploymentPhase::TimedOut)?;
        Ok(self.phase)
    }

    /// Stops tracking because polling was cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::InvalidPhaseTransition`] when the
    /// tracker is idle or already terminal.
    pub fn abandon(&mut self) -> Result<DeploymentPhase, DeploymentDomainError> {
        self.transition_to(DeploymentPhase::Abandoned)?;
        Ok(self.phase)
    }

    fn transition_to(&mut self, target: DeploymentPhase) -> Result<(), DeploymentDomainError> {
        if !self.phase.can_transition_to(target) {
            return Err(DeploymentDomainError::InvalidPhaseTransition {
                from: self.phase,
                to: target,
            });
        }
        self.phase = target;
        Ok(())
    }
}
