//! Filesystem adapters scoped to a single directory capability.

mod storage;

pub use storage::DirectoryKeyValueStorage;
