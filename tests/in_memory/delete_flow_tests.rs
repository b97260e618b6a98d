//! In-memory integration tests for deletes, alone and alongside a deploy.

use std::sync::Arc;

use super::helpers::{
    Collaborators, GatedPollTimer, config, labelled, names, relabel, schema_provider,
};
use cmdt_table::deployment::{
    adapters::RecordingPollTimer,
    domain::{DeploymentStatus, StatusReport},
};
use cmdt_table::records::domain::QualifiedName;
use cmdt_table::schema::adapters::InMemorySchemaProvider;
use cmdt_table::table::{
    domain::RowActionEvent,
    services::{DeleteOutcome, SaveOutcome},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_sends_one_batch_and_prunes_rows() -> Result<(), eyre::Report> {
    let collaborators: Collaborators<InMemorySchemaProvider, RecordingPollTimer> =
        Collaborators::new(Arc::new(schema_provider()?), Arc::new(RecordingPollTimer::new()));
    let table = collaborators.table(
        config(),
        vec![labelled("A", "x")?, labelled("B", "y")?, labelled("C", "z")?],
    );
    table.handle_selection_change(vec![labelled("A", "x")?, labelled("B", "y")?]);

    let outcome = table.handle_bulk_delete().await?;

    assert_eq!(
        outcome,
        DeleteOutcome::Enqueued {
            requested: 2,
            removed: 2
        }
    );
    assert_eq!(
        collaborators.gateway.deleted()?,
        vec![vec![
            QualifiedName::parse("Obj__mdt.A")?,
            QualifiedName::parse("Obj__mdt.B")?,
        ]]
    );
    let state = table.state();
    assert_eq!(names(state.records()), ["C"]);
    assert!(state.selected_rows().is_empty());
    assert!(table.bulk_delete_disabled());
    let notice = collaborators.last_notice()?;
    assert_eq!(notice.title(), "Delete enqueued");
    assert_eq!(notice.message(), Some("2 record(s) scheduled for deletion"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn row_delete_runs_while_a_deploy_is_polling() -> Result<(), eyre::Report> {
    let collaborators = Collaborators::new(
        Arc::new(schema_provider()?),
        Arc::new(GatedPollTimer::new()),
    );
    let table = Arc::new(collaborators.table(
        config(),
        vec![labelled("A", "old")?, labelled("B", "keep")?],
    ));
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::InProgress))?;
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::Succeeded))?;

    let saving = tokio::spawn({
        let table = Arc::clone(&table);
        async move { table.handle_save().await }
    });
    collaborators.timer.paused().await;

    let during = table.state();
    assert!(during.is_deploying());
    assert_eq!(during.deployment_status(), Some(&DeploymentStatus::InProgress));
    table
        .handle_row_action(RowActionEvent::new("delete", labelled("B", "keep")?))
        .await?;
    assert_eq!(names(table.state().records()), ["A"]);

    collaborators.timer.open();
    let outcome = saving.await??;

    assert!(matches!(outcome, SaveOutcome::Deployed(_)));
    let after = table.state();
    assert!(!after.is_deploying());
    assert_eq!(after.records(), [labelled("A", "new")?].as_slice());
    assert_eq!(
        collaborators.notice_titles(),
        ["Delete enqueued", "Deployment Completed"]
    );
    Ok(())
}
