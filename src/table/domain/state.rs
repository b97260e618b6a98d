//! Observable table state.

use crate::deployment::domain::{DeploymentJob, DeploymentStatus};
use crate::records::domain::{DeveloperName, DraftEdit, ObjectApiName, Record};
use crate::schema::domain::ColumnSpec;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

/// Snapshot of everything the table widget renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    object_api_name: Option<ObjectApiName>,
    title: String,
    records: Vec<Record>,
    columns: Vec<ColumnSpec>,
    selected_rows: Vec<Record>,
    draft_values: Vec<DraftEdit>,
    pending_snapshot: Option<Vec<Record>>,
    is_deploying: bool,
    deployment_status: Option<DeploymentStatus>,
    deployment_message: Option<String>,
}

impl TableState {
    /// Creates state for an initial record list.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Returns the resolved object type, if any.
    #[must_use]
    pub const fn object_api_name(&self) -> Option<&ObjectApiName> {
        self.object_api_name.as_ref()
    }

    /// Returns the table title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the baseline records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the column specifications.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the currently selected rows.
    #[must_use]
    pub fn selected_rows(&self) -> &[Record] {
        &self.selected_rows
    }

    /// Returns the pending draft edits.
    #[must_use]
    pub fn draft_values(&self) -> &[DraftEdit] {
        &self.draft_values
    }

    /// Returns `true` while a deployment is being tracked.
    #[must_use]
    pub const fn is_deploying(&self) -> bool {
        self.is_deploying
    }

    /// Returns the last observed deployment status.
    #[must_use]
    pub const fn deployment_status(&self) -> Option<&DeploymentStatus> {
        self.deployment_status.as_ref()
    }

    /// Returns the last observed deployment failure, prefixed for display.
    #[must_use]
    pub fn deployment_message(&self) -> Option<&str> {
        self.deployment_message.as_deref()
    }

    pub(crate) fn set_object_api_name(&mut self, object_api_name: ObjectApiName) {
        self.object_api_name = Some(object_api_name);
    }

    pub(crate) fn set_schema(&mut self, title: String, columns: Vec<ColumnSpec>) {
        self.title = title;
        self.columns = columns;
    }

    pub(crate) fn select(&mut self, rows: Vec<Record>) {
        self.selected_rows = rows;
    }

    pub(crate) fn set_drafts(&mut self, drafts: Vec<DraftEdit>) {
        self.draft_values = drafts;
    }

    pub(crate) fn clear_drafts(&mut self) {
        self.draft_values.clear();
    }

    pub(crate) fn stage_snapshot(&mut self, snapshot: Vec<Record>) {
        self.pending_snapshot = Some(snapshot);
    }

    pub(crate) fn begin_deploy(&mut self) {
        self.is_deploying = true;
        self.deployment_status = None;
        self.deployment_message = None;
    }

    pub(crate) fn record_progress(&mut self, job: &DeploymentJob) {
        self.deployment_status = Some(job.status().clone());
        self.deployment_message = job
            .failure_message()
            .map(|problem| format!("Error: {problem}"));
    }

    pub(crate) fn end_deploy(&mut self) {
        self.is_deploying = false;
    }

    /// Clears drafts and promotes the staged snapshot to the baseline.
    ///
    /// Rows deleted while the deployment was in flight stay deleted.
    pub(crate) fn commit_snapshot(&mut self) {
        self.draft_values.clear();
        let Some(snapshot) = self.pending_snapshot.take() else {
            return;
        };
        let live: HashSet<&DeveloperName> = self
            .records
            .iter()
            .map(Record::developer_name)
            .collect();
        let committed = snapshot
            .into_iter()
            .filter(|record| live.contains(record.developer_name()))
            .collect();
        self.records = committed;
    }

    pub(crate) fn discard_snapshot(&mut self) {
        self.pending_snapshot = None;
    }

    /// Removes records by developer name and clears the selection.
    ///
    /// Returns how many records were removed.
    pub(crate) fn remove_records(&mut self, developer_names: &HashSet<&str>) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| !developer_names.contains(record.developer_name().as_str()));
        self.selected_rows.clear();
        before - self.records.len()
    }
}

/// Table state shared between the session and its in-flight deployment.
#[derive(Debug, Clone, Default)]
pub struct SharedTableState {
    inner: Arc<RwLock<TableState>>,
}

impl SharedTableState {
    /// Wraps initial state.
    #[must_use]
    pub fn new(state: TableState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TableState {
        self.read(Clone::clone)
    }

    /// Reads the state under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&TableState) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut TableState) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
