//! Deployment status values and status-query responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported for a deployment job.
///
/// Values outside the known set are preserved verbatim and treated as
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeploymentStatus {
    /// Queued and not yet started.
    Pending,
    /// Running.
    InProgress,
    /// Completed and applied.
    Succeeded,
    /// Completed with failures; nothing applied.
    Failed,
    /// Stopped before completion.
    Aborted,
    /// Any other status string.
    Other(String),
}

impl DeploymentStatus {
    /// Returns the status string used by the deploy collaborator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Aborted => "Aborted",
            Self::Other(value) => value,
        }
    }

    /// Returns `true` for statuses that end polling.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Aborted)
    }
}

impl From<&str> for DeploymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "InProgress" => Self::InProgress,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            "Aborted" => Self::Aborted,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for DeploymentStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DeploymentStatus> for String {
    fn from(value: DeploymentStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component-level failure reported by a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFailure {
    /// Problem description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    /// Qualified name of the failing component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Type of the failing component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
}

impl ComponentFailure {
    /// Creates a failure with a problem description.
    #[must_use]
    pub fn with_problem(problem: impl Into<String>) -> Self {
        Self {
            problem: Some(problem.into()),
            ..Self::default()
        }
    }
}

/// Detail section of a deploy result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployDetails {
    /// Component failures in reported order.
    #[serde(default)]
    pub component_failures: Vec<ComponentFailure>,
}

/// Deploy result carried by a status response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    /// Reported status, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
    /// Failure details, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DeployDetails>,
}

/// Response of a deployment status query.
///
/// A response without a deploy result carries no information and leaves the
/// tracked job untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Deploy result, when the collaborator returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_result: Option<DeployResult>,
}

impl StatusReport {
    /// Creates a report with the given status and no failures.
    #[must_use]
    pub fn with_status(status: impl Into<DeploymentStatus>) -> Self {
        Self {
            deploy_result: Some(DeployResult {
                status: Some(status.into()),
                details: None,
            }),
        }
    }

    /// Appends a component failure with a problem description.
    #[must_use]
    pub fn with_failure(mut self, problem: impl Into<String>) -> Self {
        self.deploy_result
            .get_or_insert_with(DeployResult::default)
            .details
            .get_or_insert_with(DeployDetails::default)
            .component_failures
            .push(ComponentFailure::with_problem(problem));
        self
    }

    /// Returns the reported status, if any.
    #[must_use]
    pub fn status(&self) -> Option<&DeploymentStatus> {
        self.deploy_result
            .as_ref()
            .and_then(|result| result.status.as_ref())
    }

    /// Returns the problem of the first component failure.
    ///
    /// Only the first failure is consulted; when it has no problem text the
    /// result is `None` even if later failures do.
    #[must_use]
    pub fn first_problem(&self) -> Option<&str> {
        self.deploy_result
            .as_ref()
            .and_then(|result| result.details.as_ref())
            .and_then(|details| details.component_failures.first())
            .and_then(|failure| failure.problem.as_deref())
            .filter(|problem| !problem.is_empty())
    }
}
