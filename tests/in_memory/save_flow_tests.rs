//! In-memory integration tests for the save flow.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{Collaborators, config, labelled, relabel, schema_provider};
use cmdt_table::deployment::{
    adapters::RecordingPollTimer,
    domain::{DeploymentPhase, DeploymentStatus, StatusReport},
    services::DEFAULT_POLL_INTERVAL,
};
use cmdt_table::notification::domain::Severity;
use cmdt_table::schema::adapters::InMemorySchemaProvider;
use cmdt_table::table::services::SaveOutcome;
use rstest::{fixture, rstest};

type Fixture = Collaborators<InMemorySchemaProvider, RecordingPollTimer>;

#[fixture]
fn collaborators() -> Fixture {
    Collaborators::new(
        Arc::new(schema_provider().expect("schema provider")),
        Arc::new(RecordingPollTimer::new()),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edited_label_is_deployed_and_committed(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);
    table.connect().await?;
    table.set_draft_values(vec![relabel("A", "new")]);

    let outcome = table.handle_save().await?;

    assert!(matches!(outcome, SaveOutcome::Deployed(_)));
    assert_eq!(
        collaborators.gateway.submitted()?,
        vec![vec![labelled("A", "new")?]]
    );
    assert_eq!(table.state().records(), [labelled("A", "new")?].as_slice());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn polling_stops_one_query_after_resolution(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);
    table.set_draft_values(vec![relabel("A", "new")]);
    for status in [
        DeploymentStatus::Pending,
        DeploymentStatus::InProgress,
        DeploymentStatus::Succeeded,
        DeploymentStatus::InProgress,
    ] {
        collaborators
            .gateway
            .push_status(StatusReport::with_status(status))?;
    }

    table.handle_save().await?;

    assert_eq!(collaborators.gateway.status_queries()?.len(), 3);
    assert_eq!(collaborators.gateway.pending_status_responses()?, 1);
    assert_eq!(
        collaborators.timer.waits(),
        [DEFAULT_POLL_INTERVAL, DEFAULT_POLL_INTERVAL]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_interval_drives_the_pause(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(
        config().with_poll_interval_ms(500),
        vec![labelled("A", "old")?],
    );
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::InProgress))?;

    table.handle_save().await?;

    assert_eq!(collaborators.timer.waits(), [Duration::from_millis(500)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failure_detail_is_surfaced_and_baseline_kept(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::InProgress))?;
    collaborators.gateway.push_status(
        StatusReport::with_status(DeploymentStatus::Failed)
            .with_failure("bad value")
            .with_failure("second problem"),
    )?;

    let outcome = table.handle_save().await?;

    let SaveOutcome::Unsuccessful(poll) = outcome else {
        return Err(eyre::eyre!("expected an unsuccessful save, got {outcome:?}"));
    };
    assert_eq!(poll.phase(), DeploymentPhase::Failed);
    let notice = collaborators.last_notice()?;
    assert_eq!(notice.severity(), Severity::Error);
    assert_eq!(notice.message(), Some("Error: bad value"));
    assert_eq!(table.state().records(), [labelled("A", "old")?].as_slice());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_job_id_skips_status_queries(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators.gateway.push_submit_job(Some("  "))?;

    let outcome = table.handle_save().await?;

    assert!(matches!(outcome, SaveOutcome::Deployed(ref poll) if poll.was_untracked()));
    assert!(collaborators.gateway.status_queries()?.is_empty());
    assert!(collaborators.timer.waits().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_drafts_never_reach_the_gateway(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);

    let outcome = table.handle_save().await?;

    assert_eq!(outcome, SaveOutcome::NoChanges);
    assert!(collaborators.gateway.submitted()?.is_empty());
    assert!(collaborators.gateway.status_queries()?.is_empty());
    assert_eq!(collaborators.notice_titles(), ["No changes to deploy"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn table_stays_usable_after_a_failed_save(
    collaborators: Fixture,
) -> Result<(), eyre::Report> {
    let table = collaborators.table(config(), vec![labelled("A", "old")?]);
    table.set_draft_values(vec![relabel("A", "new")]);
    collaborators
        .gateway
        .push_submit_failure("UNABLE_TO_LOCK_ROW".into())?;

    assert!(table.handle_save().await.is_err());
    let retried = table.handle_save().await?;

    assert!(matches!(retried, SaveOutcome::Deployed(_)));
    assert_eq!(
        collaborators.notice_titles(),
        ["Deployment failed", "Deployment Completed"]
    );
    assert_eq!(table.state().records(), [labelled("A", "new")?].as_slice());
    Ok(())
}
