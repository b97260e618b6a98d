//! Gateway port for the deploy, status and delete collaborators.

use crate::deployment::domain::{DeploymentJobId, StatusReport};
use crate::error::CollaboratorError;
use crate::records::domain::{QualifiedName, Record};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for metadata gateway operations.
pub type MetadataGatewayResult<T> = Result<T, MetadataGatewayError>;

/// Contract for the backing store's deploy and delete operations.
#[async_trait]
pub trait MetadataGateway: Send + Sync {
    /// Submits changed records for deployment.
    ///
    /// Returns the job identifier to poll, or `None` when the collaborator
    /// completed the request without an asynchronous job.
    async fn submit_deploy(
        &self,
        records: &[Record],
    ) -> MetadataGatewayResult<Option<DeploymentJobId>>;

    /// Queries the status of a deployment job.
    async fn query_deploy_status(
        &self,
        job_id: &DeploymentJobId,
    ) -> MetadataGatewayResult<StatusReport>;

    /// Enqueues deletion of records addressed by qualified identifier.
    ///
    /// The whole batch is accepted or rejected as a unit.
    async fn delete_by_identifiers(
        &self,
        identifiers: &[QualifiedName],
    ) -> MetadataGatewayResult<()>;
}

/// Errors returned by metadata gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum MetadataGatewayError {
    /// The job identifier is not known to the collaborator.
    #[error("unknown deployment job: {0}")]
    UnknownJob(DeploymentJobId),

    /// The collaborator reported a failure.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
