//! When steps for table save and delete BDD scenarios.

use super::world::{TableWorld, run_async};
use rstest_bdd_macros::when;

#[when("the table is saved")]
fn table_is_saved(world: &mut TableWorld) {
    let result = run_async(world.table().handle_save());
    world.last_save = Some(result);
}

#[when("the selection is deleted")]
fn selection_is_deleted(world: &mut TableWorld) {
    let result = run_async(world.table().handle_bulk_delete());
    world.last_delete = Some(result);
}
