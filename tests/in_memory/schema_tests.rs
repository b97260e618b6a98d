//! In-memory integration tests for object type inference and describes.

use std::sync::Arc;

use super::helpers::{Collaborators, OBJECT, labelled, schema_provider};
use cmdt_table::deployment::adapters::RecordingPollTimer;
use cmdt_table::records::domain::ObjectApiName;
use cmdt_table::schema::{
    adapters::{CachedSchemaProvider, InMemorySchemaProvider},
    domain::ColumnType,
};
use cmdt_table::table::{domain::TableConfig, services::ConnectOutcome};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inferred_type_drives_columns_and_deletes() -> Result<(), eyre::Report> {
    let collaborators: Collaborators<InMemorySchemaProvider, RecordingPollTimer> =
        Collaborators::new(Arc::new(schema_provider()?), Arc::new(RecordingPollTimer::new()));
    let config: TableConfig = serde_json::from_value(json!({
        "fieldsToDisplay": " Label , Unknown__c,, Active__c ",
        "enableEditing": false
    }))?;
    let table = collaborators.table(config, vec![labelled("A", "x")?]);

    let outcome = table.connect().await?;

    assert_eq!(outcome, ConnectOutcome::Loaded(ObjectApiName::new(OBJECT)?));
    let state = table.state();
    assert_eq!(state.title(), "Objs");
    let fields: Vec<Option<&str>> = state
        .columns()
        .iter()
        .map(|column| column.field_name())
        .collect();
    assert_eq!(fields, [None, Some("Label"), Some("Active__c")]);
    assert!(state.columns().iter().all(|column| !column.editable()));
    assert_eq!(
        state.columns().last().map(|column| column.column_type()),
        Some(&ColumnType::Other("boolean".to_owned()))
    );

    table.handle_selection_change(vec![labelled("A", "x")?]);
    table.handle_bulk_delete().await?;
    let deleted = collaborators.gateway.deleted()?;
    let identifiers: Vec<&str> = deleted.iter().flatten().map(|name| name.as_str()).collect();
    assert_eq!(identifiers, ["Obj__mdt.A"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cached_provider_describes_once_per_type() -> Result<(), eyre::Report> {
    let inner = Arc::new(schema_provider()?);
    let cached = Arc::new(CachedSchemaProvider::new(Arc::clone(&inner)));
    let collaborators = Collaborators::new(cached, Arc::new(RecordingPollTimer::new()));
    let object = ObjectApiName::new(OBJECT)?;

    let first = collaborators.table(TableConfig::new("Label"), vec![labelled("A", "x")?]);
    let second = collaborators.table(TableConfig::new("Label"), vec![labelled("B", "y")?]);
    first.connect().await?;
    second.connect().await?;
    first.load_schema(&object).await?;

    assert_eq!(inner.describe_calls()?, 1);
    assert_eq!(inner.resolve_calls()?, 2);
    Ok(())
}
