//! Integration tests for a full checklist run.

use super::helpers::{now, persisted_state, storage, store_over};
use packcheck::checklist::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::NewChecklistRequest,
    services::MoveDirection,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_run_and_complete_custom_checklist(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut store = store_over(&storage);
    store.load().await;

    let id = store.checklists().create(
        NewChecklistRequest::new("Ski weekend")
            .with_item("Goggles")
            .with_item("Gloves")
            .with_item("Lift pass"),
    )?;
    let items: Vec<_> = store
        .checklist(id.clone())
        .get()
        .map(|list| list.items.iter().map(|item| item.id.clone()).collect())
        .unwrap_or_default();
    let [goggles, gloves, lift_pass] = items.as_slice() else {
        return Err(eyre::eyre!("expected three items, found {}", items.len()));
    };

    let mut run = store.checklist(id.clone());
    run.move_item(lift_pass, MoveDirection::Up);
    run.toggle_item(goggles.clone());
    run.toggle_item(lift_pass.clone());
    let entry = run
        .complete()
        .ok_or_else(|| eyre::eyre!("completion produced no history entry"))?;

    eyre::ensure!(entry.forgotten_items == ["Gloves"]);
    eyre::ensure!(entry.date == now());
    let gloves_forgotten = store
        .checklist(id.clone())
        .get()
        .and_then(|list| list.item(gloves))
        .map(|item| item.forgot_count);
    eyre::ensure!(gloves_forgotten == Some(1));

    let stats = store.statistics();
    eyre::ensure!(stats.total_checks == 1 && stats.perfect_checks == 0);
    eyre::ensure!(
        stats
            .checklist_usage_ranking
            .first()
            .is_some_and(|usage| usage.checklist_id == id && usage.checklist_name == "Ski weekend")
    );

    store.flush().await;
    let persisted = persisted_state(&storage).await?;
    eyre::ensure!(persisted.history.len() == 1);
    let order: Vec<&str> = persisted
        .checklist(&id)
        .map(|list| {
            list.sorted_items()
                .into_iter()
                .map(|item| item.name.as_str())
                .collect()
        })
        .unwrap_or_default();
    eyre::ensure!(order == ["Goggles", "Lift pass", "Gloves"], "unexpected order {order:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reset_to_defaults_discards_custom_data(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut store = store_over(&storage);
    store.load().await;
    store
        .checklists()
        .create(NewChecklistRequest::new("Temporary"))?;
    store.checklist("default-gym").complete();

    store.checklists().reset_to_defaults();

    eyre::ensure!(store.checklists().custom().count() == 0);
    eyre::ensure!(store.history().entries().is_empty());
    store.flush().await;
    eyre::ensure!(persisted_state(&storage).await?.checklists.len() == 6);
    Ok(())
}
