//! Table session orchestration.

use super::deletion::{DeleteCoordinator, DeleteError, DeleteOutcome};
use super::notices;
use crate::deployment::domain::DeploymentPhase;
use crate::deployment::ports::{MetadataGateway, PollTimer};
use crate::deployment::services::{
    DeploymentPollError, DeploymentPoller, DeploymentSubmitError, DeploymentSubmitter,
    PollCancellation, PollOutcome,
};
use crate::notification::domain::Notification;
use crate::notification::ports::NotificationSink;
use crate::records::domain::{DraftEdit, ObjectApiName, Record};
use crate::records::services::reconcile;
use crate::schema::ports::{SchemaProvider, SchemaProviderError};
use crate::schema::services::{DELETE_ACTION, build_columns};
use crate::table::domain::{RowActionEvent, SharedTableState, TableConfig, TableState};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failures surfaced by table operations.
///
/// Each failure has already been reported to the notification sink when it
/// is returned; the table stays usable afterwards.
#[derive(Debug, Error)]
pub enum TableError {
    /// The object type or its schema could not be loaded.
    #[error(transparent)]
    SchemaResolution(#[from] SchemaProviderError),
    /// The deploy request failed; no job was created.
    #[error(transparent)]
    DeploySubmit(#[from] DeploymentSubmitError),
    /// A status query failed; polling stopped with the job unresolved.
    #[error(transparent)]
    DeployPoll(#[from] DeploymentPollError),
    /// The delete request failed; local rows were kept.
    #[error(transparent)]
    Delete(#[from] DeleteError),
}

/// Result of [`MetadataTable::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Columns and title were loaded for the object type.
    Loaded(ObjectApiName),
    /// No object type was configured and there were no records to infer it
    /// from.
    AwaitingObjectType,
}

/// Result of [`MetadataTable::handle_save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No draft matched a record, so nothing was submitted.
    NoChanges,
    /// The deployment succeeded and the edits became the new baseline.
    Deployed(PollOutcome),
    /// The deployment failed, aborted or timed out; the baseline was kept.
    Unsuccessful(PollOutcome),
    /// The table was torn down before the deployment resolved.
    Abandoned,
}

/// External collaborators a table session depends on.
pub struct TableCollaborators<S, G, T, N, C> {
    /// Object type resolution and describe calls.
    pub schema: Arc<S>,
    /// Deploy, status and delete calls.
    pub gateway: Arc<G>,
    /// Pause between status checks.
    pub timer: Arc<T>,
    /// User-facing notifications.
    pub notifier: Arc<N>,
    /// Timestamp source.
    pub clock: Arc<C>,
}

/// A custom metadata table session.
///
/// Operations take `&self`, so a save that is polling can run concurrently
/// with deletes issued through the same session.
pub struct MetadataTable<S, G, T, N, C>
where
    S: SchemaProvider,
    G: MetadataGateway,
    T: PollTimer,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    config: TableConfig,
    schema: Arc<S>,
    notifier: Arc<N>,
    submitter: DeploymentSubmitter<G, C>,
    poller: DeploymentPoller<G, T, C>,
    deletions: DeleteCoordinator<G>,
    state: SharedTableState,
    cancellation: PollCancellation,
}

impl<S, G, T, N, C> MetadataTable<S, G, T, N, C>
where
    S: SchemaProvider,
    G: MetadataGateway,
    T: PollTimer,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a session over the host-supplied records.
    #[must_use]
    pub fn new(
        config: TableConfig,
        records: Vec<Record>,
        collaborators: TableCollaborators<S, G, T, N, C>,
    ) -> Self {
        let TableCollaborators {
            schema,
            gateway,
            timer,
            notifier,
            clock,
        } = collaborators;

        let mut initial = TableState::new(records);
        if let Some(object) = config.object_api_name() {
            initial.set_object_api_name(object);
        }
        let state = SharedTableState::new(initial);

        Self {
            submitter: DeploymentSubmitter::new(Arc::clone(&gateway), Arc::clone(&clock)),
            poller: DeploymentPoller::new(
                Arc::clone(&gateway),
                timer,
                clock,
                config.poller_config(),
            ),
            deletions: DeleteCoordinator::new(gateway, state.clone()),
            config,
            schema,
            notifier,
            state,
            cancellation: PollCancellation::new(),
        }
    }

    /// Returns the host configuration.
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns a copy of the current table state.
    #[must_use]
    pub fn state(&self) -> TableState {
        self.state.snapshot()
    }

    /// Returns a handle to the live table state.
    #[must_use]
    pub fn shared_state(&self) -> SharedTableState {
        self.state.clone()
    }

    /// Returns `true` when no rows are selected.
    #[must_use]
    pub fn bulk_delete_disabled(&self) -> bool {
        self.state.read(|state| state.selected_rows().is_empty())
    }

    /// Resolves the object type if needed and loads its schema.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SchemaResolution`] when the object type cannot
    /// be inferred or described.
    pub async fn connect(&self) -> Result<ConnectOutcome, TableError> {
        let Some(object) = self.resolve_object_type().await? else {
            debug!("no object type configured and no records to infer it from");
            return Ok(ConnectOutcome::AwaitingObjectType);
        };
        self.load_schema(&object).await?;
        Ok(ConnectOutcome::Loaded(object))
    }

    /// Loads columns and the default title for an object type.
    ///
    /// The object type becomes the table's type for later deletes.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SchemaResolution`] when the describe call fails.
    pub async fn load_schema(&self, object: &ObjectApiName) -> Result<(), TableError> {
        let describe = match self.schema.describe_object(object).await {
            Ok(describe) => describe,
            Err(err) => {
                warn!(object = %object, error = %err, "object describe failed");
                self.notify(Notification::error(notices::SCHEMA_FAILED, err.to_string()));
                return Err(err.into());
            }
        };

        let columns = build_columns(
            describe.fields(),
            &self.config.fields_to_display,
            self.config.enable_editing,
        );
        let title = self
            .config
            .title()
            .unwrap_or_else(|| describe.label_plural())
            .to_owned();
        debug!(object = %object, columns = columns.len(), "schema loaded");
        self.state.update(|state| {
            state.set_object_api_name(object.clone());
            state.set_schema(title, columns);
        });
        Ok(())
    }

    /// Replaces the current selection.
    pub fn handle_selection_change(&self, rows: Vec<Record>) {
        self.state.update(|state| state.select(rows));
    }

    /// Replaces the pending draft edits.
    pub fn set_draft_values(&self, drafts: Vec<DraftEdit>) {
        self.state.update(|state| state.set_drafts(drafts));
    }

    /// Discards pending draft edits.
    pub fn handle_cancel(&self) {
        self.state.update(TableState::clear_drafts);
    }

    /// Reconciles drafts, deploys the changes and tracks the job.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DeploySubmit`] or [`TableError::DeployPoll`]
    /// after notifying "Deployment failed".
    pub async fn handle_save(&self) -> Result<SaveOutcome, TableError> {
        if self.cancellation.is_cancelled() {
            debug!("save ignored after teardown");
            return Ok(SaveOutcome::Abandoned);
        }

        let (changed, snapshot) = self
            .state
            .read(|state| reconcile(state.records(), state.draft_values()))
            .into_parts();
        if changed.is_empty() {
            self.notify(Notification::info(notices::NO_CHANGES));
            return Ok(SaveOutcome::NoChanges);
        }

        self.state.update(|state| {
            state.stage_snapshot(snapshot);
            state.begin_deploy();
        });
        let job = match self.submitter.submit(&changed).await {
            Ok(job) => job,
            Err(err) => {
                self.state.update(|state| {
                    state.discard_snapshot();
                    state.end_deploy();
                });
                self.notify(Notification::error(notices::DEPLOY_FAILED, err.to_string()));
                return Err(err.into());
            }
        };

        let signal = self.cancellation.signal();
        let progress = self.state.clone();
        let tracked = self
            .poller
            .track_with(job, &signal, |observed| {
                progress.update(|state| state.record_progress(observed));
            })
            .await;

        match tracked {
            Ok(outcome) => Ok(self.finish_save(outcome)),
            Err(err) => {
                self.state.update(|state| {
                    state.discard_snapshot();
                    state.end_deploy();
                });
                self.notify(Notification::error(notices::DEPLOY_FAILED, err.to_string()));
                Err(err.into())
            }
        }
    }

    fn finish_save(&self, outcome: PollOutcome) -> SaveOutcome {
        match outcome.phase() {
            DeploymentPhase::Abandoned => {
                debug!("deployment tracking abandoned");
                return SaveOutcome::Abandoned;
            }
            DeploymentPhase::Succeeded => {
                self.state.update(|state| {
                    state.end_deploy();
                    state.commit_snapshot();
                });
                self.notify(notices::deployed(outcome.was_untracked()));
                return SaveOutcome::Deployed(outcome);
            }
            _ => {}
        }

        let detail = self.state.update(|state| {
            state.discard_snapshot();
            state.end_deploy();
            state.deployment_message().map(str::to_owned)
        });
        let notification = if outcome.phase() == DeploymentPhase::TimedOut {
            notices::timed_out(outcome.job().status_checks())
        } else {
            notices::finished_with_errors(detail.as_deref())
        };
        self.notify(notification);
        SaveOutcome::Unsuccessful(outcome)
    }

    /// Handles a row action; only the delete action has an effect.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Delete`] after notifying "Delete failed".
    pub async fn handle_row_action(
        &self,
        event: RowActionEvent,
    ) -> Result<DeleteOutcome, TableError> {
        if event.action_name != DELETE_ACTION {
            debug!(action = %event.action_name, "ignoring row action");
            return Ok(DeleteOutcome::Skipped);
        }
        self.delete_rows(std::slice::from_ref(&event.row)).await
    }

    /// Deletes every selected row in one request.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Delete`] after notifying "Delete failed".
    pub async fn handle_bulk_delete(&self) -> Result<DeleteOutcome, TableError> {
        let selected = self.state.read(|state| state.selected_rows().to_vec());
        self.delete_rows(&selected).await
    }

    async fn delete_rows(&self, rows: &[Record]) -> Result<DeleteOutcome, TableError> {
        if rows.is_empty() {
            return Ok(DeleteOutcome::Skipped);
        }
        let result = match self.deletions.qualified_names_for(rows) {
            Ok(identifiers) => self.deletions.delete_records(&identifiers).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(outcome) => {
                if let DeleteOutcome::Enqueued { requested, .. } = outcome {
                    self.notify(notices::delete_enqueued(requested));
                }
                Ok(outcome)
            }
            Err(err) => {
                self.notify(Notification::error(notices::DELETE_FAILED, err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Stops any in-flight polling; later saves are refused.
    pub fn teardown(&self) {
        info!("table torn down; cancelling deployment tracking");
        self.cancellation.cancel();
    }

    async fn resolve_object_type(&self) -> Result<Option<ObjectApiName>, TableError> {
        let (known, sample) = self.state.read(|state| {
            (
                state.object_api_name().cloned(),
                state.records().first().cloned(),
            )
        });
        if known.is_some() {
            return Ok(known);
        }
        let Some(sample) = sample else {
            return Ok(None);
        };
        match self.schema.resolve_object_type(&sample).await {
            Ok(object) => {
                info!(object = %object, "object type inferred from records");
                self.state
                    .update(|state| state.set_object_api_name(object.clone()));
                Ok(Some(object))
            }
            Err(err) => {
                warn!(error = %err, "object type resolution failed");
                self.notify(Notification::error(
                    notices::OBJECT_TYPE_FAILED,
                    err.to_string(),
                ));
                Err(err.into())
            }
        }
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}
