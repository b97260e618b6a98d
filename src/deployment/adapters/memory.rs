//! Scripted in-memory metadata gateway for tests and local hosts.

use crate::deployment::{
    domain::{DeploymentJobId, DeploymentStatus, StatusReport},
    ports::{MetadataGateway, MetadataGatewayError, MetadataGatewayResult},
};
use crate::error::CollaboratorError;
use crate::records::domain::{QualifiedName, Record};
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Outcome queued for the next submit call.
type SubmitScript = Result<Option<String>, CollaboratorError>;

/// Outcome queued for the next status query.
type StatusScript = Result<StatusReport, CollaboratorError>;

/// Thread-safe gateway whose responses are scripted in advance.
///
/// Without a scripted submit outcome, submits mint a fresh job identifier.
/// Without a scripted status response, queries report `Succeeded`. Every
/// call is recorded so tests can assert on traffic.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMetadataGateway {
    state: Arc<RwLock<ScriptedGatewayState>>,
}

#[derive(Debug, Default)]
struct ScriptedGatewayState {
    submit_script: VecDeque<SubmitScript>,
    status_script: VecDeque<StatusScript>,
    delete_failure: Option<CollaboratorError>,
    issued_jobs: HashSet<DeploymentJobId>,
    submitted: Vec<Vec<Record>>,
    status_queries: Vec<DeploymentJobId>,
    deleted: Vec<Vec<QualifiedName>>,
}

fn lock_error(err: impl ToString) -> MetadataGatewayError {
    MetadataGatewayError::Collaborator(CollaboratorError::opaque(std::io::Error::other(
        err.to_string(),
    )))
}

impl ScriptedMetadataGateway {
    /// Creates a gateway with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the job identifier returned by the next submit.
    ///
    /// `None` or a blank string scripts a submit that creates no job.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn push_submit_job(&self, job_id: Option<&str>) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.submit_script.push_back(Ok(job_id.map(str::to_owned)));
        Ok(())
    }

    /// Queues a failure for the next submit.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn push_submit_failure(&self, failure: CollaboratorError) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.submit_script.push_back(Err(failure));
        Ok(())
    }

    /// Queues the response for the next status query.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn push_status(&self, report: StatusReport) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.status_script.push_back(Ok(report));
        Ok(())
    }

    /// Queues a failure for the next status query.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn push_status_failure(&self, failure: CollaboratorError) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.status_script.push_back(Err(failure));
        Ok(())
    }

    /// Makes deletes fail with the given error until cleared with `None`.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn set_delete_failure(&self, failure: Option<CollaboratorError>) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.delete_failure = failure;
        Ok(())
    }

    /// Returns every batch of records submitted for deployment.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn submitted(&self) -> MetadataGatewayResult<Vec<Vec<Record>>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.submitted.clone())
    }

    /// Returns the job identifiers of every status query, in order.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn status_queries(&self) -> MetadataGatewayResult<Vec<DeploymentJobId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.status_queries.clone())
    }

    /// Returns every batch of identifiers accepted for deletion.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn deleted(&self) -> MetadataGatewayResult<Vec<Vec<QualifiedName>>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.deleted.clone())
    }

    /// Returns how many scripted status responses remain unconsumed.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn pending_status_responses(&self) -> MetadataGatewayResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.status_script.len())
    }
}

#[async_trait]
impl MetadataGateway for ScriptedMetadataGateway {
    async fn submit_deploy(
        &self,
        records: &[Record],
    ) -> MetadataGatewayResult<Option<DeploymentJobId>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.submitted.push(records.to_vec());
        let scripted = state
            .submit_script
            .pop_front()
            .unwrap_or_else(|| Ok(Some(Uuid::new_v4().to_string())));
        let job_id = DeploymentJobId::from_response(scripted?.as_deref());
        if let Some(issued) = &job_id {
            state.issued_jobs.insert(issued.clone());
        }
        Ok(job_id)
    }

    async fn query_deploy_status(
        &self,
        job_id: &DeploymentJobId,
    ) -> MetadataGatewayResult<StatusReport> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.issued_jobs.contains(job_id) {
            return Err(MetadataGatewayError::UnknownJob(job_id.clone()));
        }
        state.status_queries.push(job_id.clone());
        let scripted = state
            .status_script
            .pop_front()
            .unwrap_or_else(|| Ok(StatusReport::with_status(DeploymentStatus::Succeeded)));
        Ok(scripted?)
    }

    async fn delete_by_identifiers(
        &self,
        identifiers: &[QualifiedName],
    ) -> MetadataGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(failure) = &state.delete_failure {
            return Err(failure.clone().into());
        }
        state.deleted.push(identifiers.to_vec());
        Ok(())
    }
}
