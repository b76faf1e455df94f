//! When steps for checklist run BDD scenarios.

use super::world::{ChecklistWorld, run_async};
use rstest_bdd_macros::when;

#[when("the store is loaded")]
fn load_store(world: &mut ChecklistWorld) {
    world.load_source = Some(run_async(world.store.load()));
}

#[when(r#"the item "{name}" is checked"#)]
fn check_item(world: &mut ChecklistWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.checklist_id()?;
    let mut checklist = world.store.checklist(id);
    let item_id = checklist
        .get()
        .and_then(|list| list.item_named(&name))
        .map(|item| item.id.clone())
        .ok_or_else(|| eyre::eyre!("no item named {name}"))?;

    eyre::ensure!(checklist.toggle_item(item_id), "toggle left state unchanged");
    Ok(())
}

#[when("the run is completed")]
fn complete_run(world: &mut ChecklistWorld) -> Result<(), eyre::Report> {
    let id = world.checklist_id()?;
    let entry = world
        .store
        .checklist(id)
        .complete()
        .ok_or_else(|| eyre::eyre!("completion produced no history entry"))?;
    world.last_entry = Some(entry);
    Ok(())
}
