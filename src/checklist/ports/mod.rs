//! Port contracts for checklist state persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by checklist services.

pub mod storage;

pub use storage::{KeyValueStorage, StorageError, StorageResult};
