//! Shared helpers for in-memory store integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use packcheck::checklist::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::AppState,
    ports::KeyValueStorage,
    services::{ChecklistStore, DEFAULT_STORAGE_KEY},
};
use rstest::fixture;
use std::sync::Arc;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Store type exercised by the in-memory tests.
pub type TestStore = ChecklistStore<InMemoryKeyValueStorage, FixedClock>;

/// Instant all in-memory tests run at.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Provides fresh, shared in-memory storage.
#[fixture]
pub fn storage() -> InMemoryKeyValueStorage {
    InMemoryKeyValueStorage::new()
}

/// Creates an unloaded store writing to `storage`.
#[must_use]
pub fn store_over(storage: &InMemoryKeyValueStorage) -> TestStore {
    ChecklistStore::new(Arc::new(storage.clone()), Arc::new(FixedClock(now())))
}

/// Reads and decodes the state blob written under the default key.
///
/// # Errors
///
/// Returns an error when nothing is stored or the blob is not valid state.
pub async fn persisted_state(storage: &InMemoryKeyValueStorage) -> eyre::Result<AppState> {
    let blob = storage
        .get(DEFAULT_STORAGE_KEY)
        .await?
        .ok_or_else(|| eyre::eyre!("no state stored under {DEFAULT_STORAGE_KEY}"))?;
    Ok(serde_json::from_str(&blob)?)
}
