//! Shared test helpers for in-memory table integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cmdt_table::deployment::{adapters::ScriptedMetadataGateway, ports::PollTimer};
use cmdt_table::notification::{adapters::RecordingNotificationSink, domain::Notification};
use cmdt_table::records::domain::{DraftEdit, ObjectApiName, Record};
use cmdt_table::schema::{
    adapters::InMemorySchemaProvider,
    domain::{FieldDescriptor, ObjectDescribe},
    ports::SchemaProvider,
};
use cmdt_table::table::{
    domain::TableConfig,
    services::{MetadataTable, TableCollaborators},
};
use mockable::DefaultClock;
use tokio::sync::Semaphore;

/// Object type used across the integration tests.
pub const OBJECT: &str = "Obj__mdt";

/// Table type driven by the integration tests.
pub type TestTable<S, T> =
    MetadataTable<S, ScriptedMetadataGateway, T, RecordingNotificationSink, DefaultClock>;

/// Poll timer that parks each pause until the test opens the gate.
///
/// Lets a test act while a deployment is known to be between status checks.
#[derive(Debug)]
pub struct GatedPollTimer {
    entered: Semaphore,
    release: Semaphore,
}

impl GatedPollTimer {
    /// Creates a closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entered: Semaphore::new(0),
            release: Semaphore::new(0),
        }
    }

    /// Waits until the poller starts a pause.
    pub async fn paused(&self) {
        if let Ok(permit) = self.entered.acquire().await {
            permit.forget();
        }
    }

    /// Lets one pause finish.
    pub fn open(&self) {
        self.release.add_permits(1);
    }
}

#[async_trait]
impl PollTimer for GatedPollTimer {
    async fn wait(&self, _interval: Duration) {
        self.entered.add_permits(1);
        if let Ok(permit) = self.release.acquire().await {
            permit.forget();
        }
    }
}

/// Collaborators shared between a test and its table.
pub struct Collaborators<S, T> {
    pub schema: Arc<S>,
    pub gateway: Arc<ScriptedMetadataGateway>,
    pub timer: Arc<T>,
    pub notifier: Arc<RecordingNotificationSink>,
}

impl<S, T> Collaborators<S, T>
where
    S: SchemaProvider,
    T: PollTimer,
{
    /// Wraps collaborators with a fresh gateway and notification sink.
    pub fn new(schema: Arc<S>, timer: Arc<T>) -> Self {
        Self {
            schema,
            gateway: Arc::new(ScriptedMetadataGateway::new()),
            timer,
            notifier: Arc::new(RecordingNotificationSink::new()),
        }
    }

    /// Builds a table over these collaborators.
    pub fn table(&self, config: TableConfig, records: Vec<Record>) -> TestTable<S, T> {
        MetadataTable::new(
            config,
            records,
            TableCollaborators {
                schema: Arc::clone(&self.schema),
                gateway: Arc::clone(&self.gateway),
                timer: Arc::clone(&self.timer),
                notifier: Arc::clone(&self.notifier),
                clock: Arc::new(DefaultClock),
            },
        )
    }

    /// Returns the titles of every delivered notification.
    pub fn notice_titles(&self) -> Vec<String> {
        self.notifier
            .delivered()
            .iter()
            .map(|notification| notification.title().to_owned())
            .collect()
    }

    /// Returns the most recent notification.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing was delivered.
    pub fn last_notice(&self) -> Result<Notification, eyre::Report> {
        self.notifier
            .last()
            .ok_or_else(|| eyre::eyre!("expected a notification"))
    }
}

/// Builds a schema provider that knows [`OBJECT`].
///
/// # Errors
///
/// Returns an error when the provider rejects registration.
pub fn schema_provider() -> Result<InMemorySchemaProvider, eyre::Report> {
    let provider = InMemorySchemaProvider::new();
    let object = ObjectApiName::new(OBJECT)?;
    provider.register_object(
        object.clone(),
        ObjectDescribe::new(
            "Objs",
            [
                FieldDescriptor::new("DeveloperName", "Developer Name", "string"),
                FieldDescriptor::new("Label", "Label", "string"),
                FieldDescriptor::new("Active__c", "Active", "boolean"),
            ],
        ),
    )?;
    provider.set_default_type(object)?;
    Ok(provider)
}

/// Default configuration used by the integration tests.
#[must_use]
pub fn config() -> TableConfig {
    TableConfig::new("DeveloperName,Label,Active__c")
        .with_object_api_name(OBJECT)
        .with_editing(true)
}

/// Builds a record with a label.
///
/// # Errors
///
/// Returns an error when the developer name is empty.
pub fn labelled(name: &str, label: &str) -> Result<Record, eyre::Report> {
    Ok(Record::new(name)?.with_field("Label", label))
}

/// Builds a draft relabelling a record.
#[must_use]
pub fn relabel(name: &str, label: &str) -> DraftEdit {
    DraftEdit::for_record(name).with_field("Label", label)
}

/// Returns the developer names of a record list.
#[must_use]
pub fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.developer_name().to_string())
        .collect()
}
