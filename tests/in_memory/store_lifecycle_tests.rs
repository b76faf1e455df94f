//! Integration tests for loading and persisting store state.

use super::helpers::{persisted_state, storage, store_over};
use packcheck::checklist::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::{SettingsPatch, Theme},
    services::{DEFAULT_STORAGE_KEY, LoadSource},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn changes_survive_a_restart(storage: InMemoryKeyValueStorage) -> eyre::Result<()> {
    let mut first = store_over(&storage);
    eyre::ensure!(first.load().await == LoadSource::Seeded);
    first.settings().update(SettingsPatch::new().with_theme(Theme::Dark));
    first.checklist("default-commute").toggle_item("default-commute-0");
    first
        .flush()
        .await
        .ok_or_else(|| eyre::eyre!("first store never wrote"))?;
    let expected = first.state().clone();
    drop(first);

    let mut second = store_over(&storage);
    eyre::ensure!(second.load().await == LoadSource::Restored);
    eyre::ensure!(second.state() == &expected, "reloaded state differs");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupted_blob_is_replaced_on_load() -> eyre::Result<()> {
    let storage = InMemoryKeyValueStorage::with_entry(DEFAULT_STORAGE_KEY, "][");
    let mut store = store_over(&storage);

    eyre::ensure!(store.load().await == LoadSource::Recovered);
    eyre::ensure!(!store.state().checklists.is_empty());
    store
        .flush()
        .await
        .ok_or_else(|| eyre::eyre!("recovered state was not written"))?;

    let persisted = persisted_state(&storage).await?;
    eyre::ensure!(&persisted == store.state(), "storage should hold the defaults");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_blob_tracks_every_change(storage: InMemoryKeyValueStorage) -> eyre::Result<()> {
    let mut store = store_over(&storage);
    store.load().await;

    for time in ["06:00", "06:15", "06:30"] {
        store
            .settings()
            .update(SettingsPatch::new().with_default_reminder_time(time));
        store.flush().await;
        let persisted = persisted_state(&storage).await?;
        eyre::ensure!(
            persisted.settings.default_reminder_time == time,
            "expected {time}, found {}",
            persisted.settings.default_reminder_time
        );
    }
    Ok(())
}
