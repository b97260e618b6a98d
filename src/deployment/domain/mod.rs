//! Domain model for deployment jobs.
//!
//! A [`DeploymentJob`] is created on submit and only mutated by the
//! [`DeploymentTracker`], which enforces the polling state machine.

mod error;
mod ids;
mod job;
mod phase;
mod status;
mod tracker;

pub use error::DeploymentDomainError;
pub use ids::DeploymentJobId;
pub use job::DeploymentJob;
pub use phase::DeploymentPhase;
pub use status::{ComponentFailure, DeployDetails, DeployResult, DeploymentStatus, StatusReport};
pub use tracker::DeploymentTracker;
