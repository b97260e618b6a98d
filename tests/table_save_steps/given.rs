//! Given steps for table save and delete BDD scenarios.

use super::world::TableWorld;
use cmdt_table::deployment::domain::{DeploymentStatus, StatusReport};
use cmdt_table::error::CollaboratorError;
use cmdt_table::records::domain::{DraftEdit, Record};
use rstest_bdd_macros::given;

#[given(r#"a table of "{object}" records"#)]
fn table_of_object(world: &mut TableWorld, object: String) {
    world.object_api_name = Some(object);
}

#[given(r#"a record "{name}" labelled "{label}""#)]
fn record_labelled(
    world: &mut TableWorld,
    name: String,
    label: String,
) -> Result<(), eyre::Report> {
    world
        .records
        .push(Record::new(name)?.with_field("Label", label));
    Ok(())
}

#[given(r#"a draft relabelling "{name}" to "{label}""#)]
fn draft_relabelling(world: &mut TableWorld, name: String, label: String) {
    world
        .drafts
        .push(DraftEdit::for_record(name).with_field("Label", label));
}

#[given(r#"the deployment reports "{first}" and then "{second}""#)]
fn deployment_reports(
    world: &mut TableWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::from(first)))?;
    world
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::from(second)))?;
    Ok(())
}

#[given(r#"the deployment reports "{first}" and then fails with "{problem}""#)]
fn deployment_fails_with(
    world: &mut TableWorld,
    first: String,
    problem: String,
) -> Result<(), eyre::Report> {
    world
        .gateway
        .push_status(StatusReport::with_status(DeploymentStatus::from(first)))?;
    world.gateway.push_status(
        StatusReport::with_status(DeploymentStatus::Failed).with_failure(problem),
    )?;
    Ok(())
}

#[given("the deploy returns no job identifier")]
fn deploy_returns_no_job(world: &mut TableWorld) -> Result<(), eyre::Report> {
    world.gateway.push_submit_job(None)?;
    Ok(())
}

#[given(r#"the row "{name}" is selected"#)]
fn row_selected(world: &mut TableWorld, name: String) {
    world.selected.push(name);
}

#[given(r#"deletes fail with "{message}""#)]
fn deletes_fail(world: &mut TableWorld, message: String) -> Result<(), eyre::Report> {
    world
        .gateway
        .set_delete_failure(Some(CollaboratorError::text(message)))?;
    Ok(())
}
