//! Error types for deployment domain validation.

use super::DeploymentPhase;
use thiserror::Error;

/// Errors returned by deployment domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeploymentDomainError {
    /// The job identifier is empty after trimming.
    #[error("deployment job identifier must not be empty")]
    EmptyJobId,

    /// The requested phase transition is not permitted.
    #[error("invalid deployment phase transition from {from} to {to}")]
    InvalidPhaseTransition {
        /// Current phase.
        from: DeploymentPhase,
        /// Requested phase.
        to: DeploymentPhase,
    },

    /// The tracker has no job to operate on.
    #[error("no deployment job has been submitted")]
    NoJob,
}
