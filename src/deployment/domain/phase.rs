//! Phases of the deployment tracking state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a tracked deployment.
///
/// `TimedOut` is reached only when a status-check limit is configured;
/// `Abandoned` only when polling is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPhase {
    /// Nothing submitted.
    Idle,
    /// Submitted; polling not yet started.
    Submitted,
    /// Waiting for a resolved status.
    Polling,
    /// The deployment succeeded.
    Succeeded,
    /// The deployment failed.
    Failed,
    /// The deployment was aborted.
    Aborted,
    /// The status-check limit was reached before a resolved status.
    TimedOut,
    /// Polling was cancelled before a resolved status.
    Abandoned,
}

impl DeploymentPhase {
    /// Returns the canonical phase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitted => "submitted",
            Self::Polling => "polling",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Aborted => "aborted",
            Self::TimedOut => "timed_out",
            Self::Abandoned => "abandoned",
        }
    }

    /// Returns `true` when the phase ends the job's lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Failed | Self::Aborted | Self::TimedOut | Self::Abandoned
        )
    }

    /// Returns whether the state machine permits moving to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Idle => matches!(target, Self::Submitted),
            Self::Submitted => matches!(target, Self::Polling | Self::Succeeded | Self::Abandoned),
            Self::Polling => matches!(
                target,
                Self::Succeeded | Self::Failed | Self::Aborted | Self::TimedOut | Self::Abandoned
            ),
            Self::Succeeded | Self::Failed | Self::Aborted | Self::TimedOut | Self::Abandoned => {
                false
            }
        }
    }
}

impl fmt::Display for DeploymentPhase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
