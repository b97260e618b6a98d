//! Shared world state for table save and delete BDD scenarios.

use std::sync::Arc;

use cmdt_table::deployment::adapters::{RecordingPollTimer, ScriptedMetadataGateway};
use cmdt_table::notification::adapters::RecordingNotificationSink;
use cmdt_table::records::domain::{DraftEdit, Record};
use cmdt_table::schema::adapters::InMemorySchemaProvider;
use cmdt_table::table::{
    domain::TableConfig,
    services::{DeleteOutcome, MetadataTable, SaveOutcome, TableCollaborators, TableError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Table type used by the BDD world.
pub type TestTable = MetadataTable<
    InMemorySchemaProvider,
    ScriptedMetadataGateway,
    RecordingPollTimer,
    RecordingNotificationSink,
    DefaultClock,
>;

/// Scenario world for table behaviour tests.
pub struct TableWorld {
    pub gateway: Arc<ScriptedMetadataGateway>,
    pub notifier: Arc<RecordingNotificationSink>,
    pub object_api_name: Option<String>,
    pub records: Vec<Record>,
    pub drafts: Vec<DraftEdit>,
    pub selected: Vec<String>,
    pub table: Option<TestTable>,
    pub last_save: Option<Result<SaveOutcome, TableError>>,
    pub last_delete: Option<Result<DeleteOutcome, TableError>>,
}

impl TableWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateway: Arc::new(ScriptedMetadataGateway::new()),
            notifier: Arc::new(RecordingNotificationSink::new()),
            object_api_name: None,
            records: Vec::new(),
            drafts: Vec::new(),
            selected: Vec::new(),
            table: None,
            last_save: None,
            last_delete: None,
        }
    }

    /// Builds the table from the pending scenario state on first use.
    pub fn table(&mut self) -> &TestTable {
        let Self {
            gateway,
            notifier,
            object_api_name,
            records,
            drafts,
            selected,
            table,
            ..
        } = self;
        table.get_or_insert_with(|| {
            let mut config = TableConfig::new("Label").with_editing(true);
            if let Some(object) = object_api_name.as_deref() {
                config = config.with_object_api_name(object);
            }
            let built = MetadataTable::new(
                config,
                records.clone(),
                TableCollaborators {
                    schema: Arc::new(InMemorySchemaProvider::new()),
                    gateway: Arc::clone(gateway),
                    timer: Arc::new(RecordingPollTimer::new()),
                    notifier: Arc::clone(notifier),
                    clock: Arc::new(DefaultClock),
                },
            );
            built.set_draft_values(drafts.clone());
            built.handle_selection_change(
                records
                    .iter()
                    .filter(|record| selected.contains(&record.developer_name().to_string()))
                    .cloned()
                    .collect(),
            );
            built
        })
    }
}

impl Default for TableWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TableWorld {
    TableWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
