//! Services coordinating domain logic with storage.

mod config;
mod persistence;
mod selectors;
mod store;
mod write_queue;

pub use config::{DEFAULT_STORAGE_KEY, StoreConfig};
pub use persistence::{LoadSource, LoadedState, PersistenceError, PersistenceGateway};
pub use selectors::{
    ChecklistSelector, ChecklistsSelector, HistorySelector, MoveDirection, SettingsSelector,
};
pub use store::ChecklistStore;
pub use write_queue::{WriteQueue, WriteReceipt};
