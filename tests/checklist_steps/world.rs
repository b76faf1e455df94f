//! Shared world state for checklist run BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use packcheck::checklist::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::{CheckHistory, ChecklistId},
    services::{ChecklistStore, LoadSource},
};
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestStore = ChecklistStore<InMemoryKeyValueStorage, DefaultClock>;

/// Scenario world for checklist run behaviour tests.
pub struct ChecklistWorld {
    pub storage: InMemoryKeyValueStorage,
    pub store: TestStore,
    pub load_source: Option<LoadSource>,
    pub checklist_id: Option<ChecklistId>,
    pub last_entry: Option<CheckHistory>,
}

impl ChecklistWorld {
    /// Creates a world over empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::over(InMemoryKeyValueStorage::new())
    }

    /// Creates a world whose store reads and writes `storage`.
    #[must_use]
    pub fn over(storage: InMemoryKeyValueStorage) -> Self {
        let store = ChecklistStore::new(Arc::new(storage.clone()), Arc::new(DefaultClock));
        Self {
            storage,
            store,
            load_source: None,
            checklist_id: None,
            last_entry: None,
        }
    }

    /// Returns the checklist created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no checklist has been created yet.
    pub fn checklist_id(&self) -> Result<ChecklistId, eyre::Report> {
        self.checklist_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing checklist in scenario world"))
    }
}

impl Default for ChecklistWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChecklistWorld {
    ChecklistWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
