//! Submits changed records for deployment.

use crate::deployment::{
    domain::DeploymentJob,
    ports::{MetadataGateway, MetadataGatewayError},
};
use crate::records::domain::Record;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for deployment submission.
#[derive(Debug, Error)]
pub enum DeploymentSubmitError {
    /// There were no changed records; nothing was sent.
    #[error("no changed records to deploy")]
    NothingToSubmit,
    /// The deploy collaborator rejected the submission.
    #[error(transparent)]
    Gateway(#[from] MetadataGatewayError),
}

/// Sends changed records to the deploy collaborator.
#[derive(Clone)]
pub struct DeploymentSubmitter<G, C>
where
    G: MetadataGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> DeploymentSubmitter<G, C>
where
    G: MetadataGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new submitter.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Submits the changed records and returns a pending job.
    ///
    /// A job without an identifier is a valid success meaning the change is
    /// already complete.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentSubmitError::NothingToSubmit`] without calling the
    /// collaborator when `changed` is empty, or
    /// [`DeploymentSubmitError::Gateway`] when the collaborator fails; no job
    /// is created in either case.
    pub async fn submit(&self, changed: &[Record]) -> Result<DeploymentJob, DeploymentSubmitError> {
        if changed.is_empty() {
            return Err(DeploymentSubmitError::NothingToSubmit);
        }

        let job_id = self
            .gateway
            .submit_deploy(changed)
            .await
            .inspect_err(|err| warn!(count = changed.len(), error = %err, "deploy submission failed"))?;
        info!(
            count = changed.len(),
            job_id = job_id.as_ref().map_or("none", |id| id.as_str()),
            "deploy submitted"
        );
        Ok(DeploymentJob::submitted(job_id, &*self.clock))
    }
}
