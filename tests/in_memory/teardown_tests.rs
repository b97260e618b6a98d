//! In-memory integration tests for abandoning a deployment.

use std::sync::Arc;

use super::helpers::{Collaborators, GatedPollTimer, config, labelled, relabel, schema_provider};
use cmdt_table::deployment::{
    adapters::TokioPollTimer,
    domain::{DeploymentStatus, StatusReport},
};
use cmdt_table::table::services::SaveOutcome;
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn teardown_mid_poll_abandons_without_commit() -> Result<(), eyre::Report> {
    let collaborators = Collaborators::new(
        Arc::new(schema_provider()?),
        Arc::new(GatedPollTimer::new()),
    );
    let table = Arc::new(collaborators.table(config(), vec![labelled("A", "old")?]));
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::InProgress))?;

    let saving = tokio::spawn({
        let table = Arc::clone(&table);
        async move { table.handle_save().await }
    });
    collaborators.timer.paused().await;
    table.teardown();
    let outcome = saving.await??;

    assert_eq!(outcome, SaveOutcome::Abandoned);
    assert_eq!(collaborators.gateway.status_queries()?.len(), 1);
    assert!(collaborators.notifier.delivered().is_empty());
    let state = table.state();
    assert_eq!(state.records(), [labelled("A", "old")?].as_slice());
    assert_eq!(state.draft_values(), [relabel("A", "new")].as_slice());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn teardown_interrupts_a_real_pause() -> Result<(), eyre::Report> {
    let collaborators = Collaborators::new(Arc::new(schema_provider()?), Arc::new(TokioPollTimer));
    let table = Arc::new(collaborators.table(
        config().with_poll_interval_ms(3_600_000),
        vec![labelled("A", "old")?],
    ));
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::InProgress))?;

    let saving = tokio::spawn({
        let table = Arc::clone(&table);
        async move { table.handle_save().await }
    });
    while collaborators.gateway.status_queries()?.is_empty() {
        tokio::task::yield_now().await;
    }
    table.teardown();
    let outcome = tokio::time::timeout(Duration::from_secs(5), saving).await???;

    assert_eq!(outcome, SaveOutcome::Abandoned);
    assert_eq!(collaborators.gateway.pending_status_responses()?, 0);
    Ok(())
}
