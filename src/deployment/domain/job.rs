//! Deployment job entity.

use super::{DeploymentJobId, DeploymentStatus, StatusReport};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Server-side deployment job created by a submit.
///
/// A job without an identifier came from a synchronous or delete-only path
/// and is considered complete as soon as it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentJob {
    id: Option<DeploymentJobId>,
    status: DeploymentStatus,
    failure_message: Option<String>,
    status_checks: u32,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DeploymentJob {
    /// Creates a pending job for a successful submit.
    #[must_use]
    pub fn submitted(id: Option<DeploymentJobId>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            status: DeploymentStatus::Pending,
            failure_message: None,
            status_checks: 0,
            submitted_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the job identifier, if the submit produced one.
    #[must_use]
    pub const fn id(&self) -> Option<&DeploymentJobId> {
        self.id.as_ref()
    }

    /// Returns the last known status.
    #[must_use]
    pub const fn status(&self) -> &DeploymentStatus {
        &self.status
    }

    /// Returns the first component failure's problem from the last report.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    /// Returns how many status responses have been applied.
    #[must_use]
    pub const fn status_checks(&self) -> u32 {
        self.status_checks
    }

    /// Returns the submit timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the timestamp of the last change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a status response.
    ///
    /// Responses without a deploy result only count as a check. Otherwise the
    /// reported status (when present) replaces the current one and the failure
    /// message is replaced by the first failure's problem, or cleared.
    pub(crate) fn apply_report(&mut self, report: &StatusReport, clock: &impl Clock) {
        self.status_checks = self.status_checks.saturating_add(1);
        if report.deploy_result.is_none() {
            return;
        }
        if let Some(status) = report.status() {
            self.status = status.clone();
        }
        self.failure_message = report.first_problem().map(str::to_owned);
        self.updated_at = clock.utc();
    }

    pub(crate) fn complete_without_tracking(&mut self, clock: &impl Clock) {
        self.status = DeploymentStatus::Succeeded;
        self.updated_at = clock.utc();
    }
}
