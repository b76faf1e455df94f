//! Owned state store: dispatch, one-shot load, and write-behind persistence.

use crate::checklist::{
    domain::{Action, AppState, Statistics, apply, compute_statistics},
    ports::KeyValueStorage,
    services::{LoadSource, PersistenceGateway, StoreConfig, WriteQueue, WriteReceipt},
};
use mockable::Clock;
use std::sync::Arc;

/// Canonical owner of the application state.
///
/// Transitions run synchronously through [`ChecklistStore::dispatch`] in call
/// order. Once [`ChecklistStore::load`] has resolved, every state change is
/// handed to a background writer; dispatches never wait for storage.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use packcheck::checklist::{
///     adapters::memory::InMemoryKeyValueStorage,
///     domain::SettingsPatch,
///     services::ChecklistStore,
/// };
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let mut store = ChecklistStore::new(
///     Arc::new(InMemoryKeyValueStorage::new()),
///     Arc::new(DefaultClock),
/// );
/// store.load().await;
/// store.settings().update(SettingsPatch::new().with_haptic_feedback(false));
/// assert!(!store.state().settings.haptic_feedback);
/// # });
/// ```
pub struct ChecklistStore<S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    gateway: Arc<PersistenceGateway<S, C>>,
    clock: Arc<C>,
    state: Arc<AppState>,
    load_source: Option<LoadSource>,
    writer: Option<WriteQueue>,
}

impl<S, C> ChecklistStore<S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates an unloaded store with the default configuration.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, StoreConfig::default())
    }

    /// Creates an unloaded store with a custom configuration.
    #[must_use]
    pub fn with_config(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let gateway = PersistenceGateway::with_config(storage, Arc::clone(&clock), config);
        Self {
            gateway: Arc::new(gateway),
            clock,
            state: Arc::new(AppState::default()),
            load_source: None,
            writer: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a shared handle to the current state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Returns `true` until [`ChecklistStore::load`] has resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.load_source.is_none()
    }

    /// Returns where the loaded state came from, once loaded.
    #[must_use]
    pub const fn load_source(&self) -> Option<LoadSource> {
        self.load_source
    }

    /// Returns the clock used for timestamps.
    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }

    /// Loads persisted state and enables write-behind persistence.
    ///
    /// Loading happens once; later calls return the first source without
    /// touching storage. The loaded state is written back immediately so a
    /// first launch persists its seeded defaults.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub async fn load(&mut self) -> LoadSource {
        if let Some(source) = self.load_source {
            tracing::debug!(?source, "state already loaded");
            return source;
        }

        let loaded = self.gateway.load_with_source().await;
        self.dispatch(Action::LoadData(Box::new(loaded.state)));
        self.load_source = Some(loaded.source);

        let mut writer = WriteQueue::spawn(Arc::clone(&self.gateway));
        writer.enqueue(self.snapshot());
        self.writer = Some(writer);

        tracing::debug!(source = ?loaded.source, "state loaded");
        loaded.source
    }

    /// Applies `action` to the current state.
    ///
    /// Returns `false` for identity transitions, which are not persisted.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let Some(next) = apply(&self.state, action, self.clock.utc()) else {
            tracing::debug!(action = name, "action left state unchanged");
            return false;
        };

        self.state = Arc::new(next);
        if let Some(writer) = self.writer.as_mut() {
            let sequence = writer.enqueue(Arc::clone(&self.state));
            tracing::debug!(action = name, sequence, "state change queued for write");
        }
        true
    }

    /// Waits until the latest state change has been written.
    ///
    /// Returns `None` before loading or when the writer has stopped.
    pub async fn flush(&self) -> Option<WriteReceipt> {
        match &self.writer {
            Some(writer) => writer.flush().await,
            None => None,
        }
    }

    /// Returns the receipt of the most recent completed write.
    #[must_use]
    pub fn last_write(&self) -> Option<WriteReceipt> {
        self.writer.as_ref().and_then(WriteQueue::last_receipt)
    }

    /// Computes statistics over the current history in local time.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        compute_statistics(&self.state.history, &self.clock.local())
    }
}
