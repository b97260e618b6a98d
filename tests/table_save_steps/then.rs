//! Then steps for table save and delete BDD scenarios.

use super::world::TableWorld;
use cmdt_table::records::domain::FieldValue;
use rstest_bdd_macros::then;

#[then(r#"the record "{name}" is labelled "{label}""#)]
fn record_is_labelled(
    world: &mut TableWorld,
    name: String,
    label: String,
) -> Result<(), eyre::Report> {
    let state = world.table().state();
    let record = state
        .records()
        .iter()
        .find(|record| record.developer_name().as_str() == name)
        .ok_or_else(|| eyre::eyre!("record {name} is not in the table"))?;
    let expected = FieldValue::from(label.as_str());
    eyre::ensure!(
        record.get("Label") == Some(&expected),
        "expected {name} to be labelled {label}, found {:?}",
        record.get("Label")
    );
    Ok(())
}

#[then(r#"the last notification is a "{severity}" titled "{title}""#)]
fn last_notification_is(
    world: &TableWorld,
    severity: String,
    title: String,
) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was delivered"))?;
    eyre::ensure!(
        last.severity().as_str() == severity && last.title() == title,
        "expected {severity} notification {title:?}, got {last:?}"
    );
    Ok(())
}

#[then(r#"the notification message is "{message}""#)]
fn notification_message_is(world: &TableWorld, message: String) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was delivered"))?;
    eyre::ensure!(
        last.message() == Some(message.as_str()),
        "expected message {message:?}, got {:?}",
        last.message()
    );
    Ok(())
}

#[then("no deployment was submitted")]
fn no_deployment_submitted(world: &TableWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.gateway.submitted()?.is_empty(),
        "expected no deploy submission"
    );
    Ok(())
}

#[then("no status query was made")]
fn no_status_query(world: &TableWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.gateway.status_queries()?.is_empty(),
        "expected no status queries"
    );
    Ok(())
}

#[then(r#"the delete request names "{identifiers}""#)]
fn delete_request_named(world: &TableWorld, identifiers: String) -> Result<(), eyre::Report> {
    let sent: Vec<Vec<String>> = world
        .gateway
        .deleted()?
        .iter()
        .map(|batch| batch.iter().map(ToString::to_string).collect())
        .collect();
    let expected: Vec<String> = identifiers.split(',').map(str::to_owned).collect();
    eyre::ensure!(
        sent == [expected.clone()],
        "expected one delete batch {expected:?}, got {sent:?}"
    );
    Ok(())
}

#[then(r#"only the record "{name}" remains"#)]
fn only_record_remains(world: &mut TableWorld, name: String) -> Result<(), eyre::Report> {
    let state = world.table().state();
    let remaining: Vec<String> = state
        .records()
        .iter()
        .map(|record| record.developer_name().to_string())
        .collect();
    eyre::ensure!(remaining == [name.clone()], "expected only {name}, got {remaining:?}");
    eyre::ensure!(state.selected_rows().is_empty(), "selection should be cleared");
    Ok(())
}
