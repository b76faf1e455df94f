//! Given steps for checklist run BDD scenarios.

use super::world::{ChecklistWorld, run_async};
use packcheck::checklist::{
    adapters::memory::InMemoryKeyValueStorage, domain::NewChecklistRequest,
    services::DEFAULT_STORAGE_KEY,
};
use rstest_bdd_macros::given;

#[given("an empty storage backend")]
fn empty_storage(world: &mut ChecklistWorld) {
    *world = ChecklistWorld::over(InMemoryKeyValueStorage::new());
}

#[given(r#"a storage backend containing "{blob}""#)]
fn storage_containing(world: &mut ChecklistWorld, blob: String) {
    *world = ChecklistWorld::over(InMemoryKeyValueStorage::with_entry(
        DEFAULT_STORAGE_KEY,
        blob,
    ));
}

#[given("the store is loaded")]
fn store_is_loaded(world: &mut ChecklistWorld) {
    world.load_source = Some(run_async(world.store.load()));
}

#[given(r#"a custom checklist "{name}" with items "{first}" and "{second}""#)]
fn custom_checklist(
    world: &mut ChecklistWorld,
    name: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let request = NewChecklistRequest::new(name)
        .with_item(first)
        .with_item(second);
    world.checklist_id = Some(world.store.checklists().create(request)?);
    Ok(())
}
