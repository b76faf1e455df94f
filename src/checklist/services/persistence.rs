//! Persistence gateway between the in-memory state and key-value storage.
//!
//! The gateway never fails outwards: unreadable data falls back to the
//! default dataset and write failures are logged. The in-memory state stays
//! authoritative for the session either way.

use crate::checklist::{
    domain::AppState,
    ports::{KeyValueStorage, StorageError},
    services::StoreConfig,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Where a loaded state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadSource {
    /// Parsed from the stored blob.
    Restored,
    /// Nothing was stored; the default dataset was used.
    Seeded,
    /// The blob was unreadable or storage failed; the default dataset was used.
    Recovered,
}

/// State returned by [`PersistenceGateway::load_with_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    /// The loaded or defaulted state.
    pub state: AppState,
    /// Where it came from.
    pub source: LoadSource,
}

/// Errors surfaced by [`PersistenceGateway::try_save`].
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The state could not be encoded as JSON.
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reads and writes the serialized [`AppState`] under a fixed key.
pub struct PersistenceGateway<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StoreConfig,
}

impl<S, C> PersistenceGateway<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Creates a gateway with the default configuration.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, StoreConfig::default())
    }

    /// Creates a gateway with a custom configuration.
    #[must_use]
    pub const fn with_config(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        Self {
            storage,
            clock,
            config,
        }
    }

    /// Returns the storage key in use.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Loads the persisted state, falling back to the default dataset.
    pub async fn load(&self) -> AppState {
        self.load_with_source().await.state
    }

    /// Loads the persisted state and reports where it came from.
    pub async fn load_with_source(&self) -> LoadedState {
        let key = self.storage_key();
        match self.storage.get(key).await {
            Ok(Some(blob)) => match serde_json::from_str::<AppState>(&blob) {
                Ok(state) => LoadedState {
                    state,
                    source: LoadSource::Restored,
                },
                Err(err) => {
                    tracing::warn!(%err, key, "stored state is unreadable; using default checklists");
                    self.defaults(LoadSource::Recovered)
                }
            },
            Ok(None) => self.defaults(LoadSource::Seeded),
            Err(err) => {
                tracing::warn!(%err, key, "failed to read stored state; using default checklists");
                self.defaults(LoadSource::Recovered)
            }
        }
    }

    fn defaults(&self, source: LoadSource) -> LoadedState {
        LoadedState {
            state: AppState::seeded(self.clock.utc()),
            source,
        }
    }

    /// Serializes `state` and writes it under the storage key.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding or the write fails.
    pub async fn try_save(&self, state: &AppState) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(state)?;
        self.storage.set(self.storage_key(), blob).await?;
        Ok(())
    }

    /// Writes `state`, logging and dropping any failure.
    ///
    /// Returns `true` when the write succeeded.
    pub async fn save(&self, state: &AppState) -> bool {
        match self.try_save(state).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, key = self.storage_key(), "failed to save state");
                false
            }
        }
    }

    /// Removes everything from the storage backend, logging any failure.
    ///
    /// Returns `true` when the backend was cleared.
    pub async fn clear(&self) -> bool {
        match self.storage.clear().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "failed to clear storage");
                false
            }
        }
    }
}
