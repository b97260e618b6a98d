//! Delete-by-name coordination.

use crate::deployment::ports::{MetadataGateway, MetadataGatewayError};
use crate::records::domain::{QualifiedName, Record};
use crate::table::domain::SharedTableState;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while deleting records.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// Rows cannot be qualified before the object type is known.
    #[error("object type is not known yet")]
    MissingObjectType,
    /// The delete call failed; no rows were removed.
    #[error(transparent)]
    Gateway(#[from] MetadataGatewayError),
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was requested, so no call was made.
    Skipped,
    /// The batch was accepted.
    Enqueued {
        /// Number of identifiers sent.
        requested: usize,
        /// Number of local rows removed.
        removed: usize,
    },
}

/// Issues batched deletes and prunes local state on success.
#[derive(Clone)]
pub struct DeleteCoordinator<G>
where
    G: MetadataGateway,
{
    gateway: Arc<G>,
    state: SharedTableState,
}

impl<G> DeleteCoordinator<G>
where
    G: MetadataGateway,
{
    /// Creates a coordinator over shared table state.
    #[must_use]
    pub const fn new(gateway: Arc<G>, state: SharedTableState) -> Self {
        Self { gateway, state }
    }

    /// Qualifies rows with the table's object type.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::MissingObjectType`] when the object type has
    /// not been resolved.
    pub fn qualified_names_for(&self, rows: &[Record]) -> Result<Vec<QualifiedName>, DeleteError> {
        let object = self
            .state
            .read(|state| state.object_api_name().cloned())
            .ok_or(DeleteError::MissingObjectType)?;
        Ok(rows
            .iter()
            .map(|row| QualifiedName::new(&object, row.developer_name()))
            .collect())
    }

    /// Deletes records by qualified name in one collaborator call.
    ///
    /// An empty list is a no-op. On success, local rows whose developer name
    /// matches the trailing segment of any identifier are removed and the
    /// selection is cleared. Rows not present locally are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::Gateway`] when the call fails; local state is
    /// left untouched.
    pub async fn delete_records(
        &self,
        identifiers: &[QualifiedName],
    ) -> Result<DeleteOutcome, DeleteError> {
        if identifiers.is_empty() {
            return Ok(DeleteOutcome::Skipped);
        }
        self.gateway
            .delete_by_identifiers(identifiers)
            .await
            .inspect_err(|err| {
                warn!(count = identifiers.len(), error = %err, "delete request failed");
            })?;

        let developer_names: HashSet<&str> = identifiers
            .iter()
            .map(QualifiedName::developer_name)
            .collect();
        let removed = self
            .state
            .update(|state| state.remove_records(&developer_names));
        info!(requested = identifiers.len(), removed, "delete enqueued");
        Ok(DeleteOutcome::Enqueued {
            requested: identifiers.len(),
            removed,
        })
    }
}
