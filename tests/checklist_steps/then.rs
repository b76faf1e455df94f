//! Then steps for checklist run BDD scenarios.

use super::world::{ChecklistWorld, run_async};
use packcheck::checklist::{
    domain::AppState,
    ports::KeyValueStorage,
    services::{DEFAULT_STORAGE_KEY, LoadSource},
};
use rstest_bdd_macros::then;

#[then(r#"the load source is "{source}""#)]
fn load_source_is(world: &ChecklistWorld, source: String) -> Result<(), eyre::Report> {
    let expected = match source.as_str() {
        "restored" => LoadSource::Restored,
        "seeded" => LoadSource::Seeded,
        "recovered" => LoadSource::Recovered,
        other => return Err(eyre::eyre!("unknown load source {other}")),
    };
    eyre::ensure!(
        world.load_source == Some(expected),
        "expected {expected:?}, found {:?}",
        world.load_source
    );
    Ok(())
}

#[then("the store holds {count:usize} built-in checklists")]
fn built_in_checklists(world: &mut ChecklistWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.store.checklists().built_in().count();
    eyre::ensure!(found == count, "expected {count} built-in checklists, found {found}");
    Ok(())
}

#[then("storage holds the current state")]
fn storage_holds_state(world: &ChecklistWorld) -> Result<(), eyre::Report> {
    run_async(world.store.flush())
        .ok_or_else(|| eyre::eyre!("store has not written anything"))?;
    let blob = run_async(world.storage.get(DEFAULT_STORAGE_KEY))?
        .ok_or_else(|| eyre::eyre!("nothing stored under {DEFAULT_STORAGE_KEY}"))?;
    let stored: AppState = serde_json::from_str(&blob)?;

    eyre::ensure!(&stored == world.store.state(), "stored state differs from the store");
    Ok(())
}

#[then("statistics report {checks:usize} checks with {perfect:usize} perfect")]
fn statistics_report(
    world: &ChecklistWorld,
    checks: usize,
    perfect: usize,
) -> Result<(), eyre::Report> {
    let stats = world.store.statistics();
    eyre::ensure!(
        stats.total_checks == checks && stats.perfect_checks == perfect,
        "expected {checks}/{perfect}, found {}/{}",
        stats.total_checks,
        stats.perfect_checks
    );
    Ok(())
}

#[then(r#""{name}" is the most forgotten item"#)]
fn most_forgotten(world: &ChecklistWorld, name: String) -> Result<(), eyre::Report> {
    let stats = world.store.statistics();
    let top = stats
        .forgotten_items_ranking
        .first()
        .ok_or_else(|| eyre::eyre!("forgotten ranking is empty"))?;
    eyre::ensure!(top.item_name == name, "expected {name}, found {}", top.item_name);
    Ok(())
}

#[then(r#""{name}" has been forgotten {count:u32} times"#)]
fn forgotten_count(world: &ChecklistWorld, name: String, count: u32) -> Result<(), eyre::Report> {
    let id = world.checklist_id()?;
    let found = world
        .store
        .state()
        .checklist(&id)
        .and_then(|list| list.item_named(&name))
        .map(|item| item.forgot_count);
    eyre::ensure!(found == Some(count), "expected {count}, found {found:?}");
    Ok(())
}
