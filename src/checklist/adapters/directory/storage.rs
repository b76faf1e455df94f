//! Directory-backed key-value storage.
//!
//! Each key is stored as one file inside a capability-scoped directory. File
//! names are the hex encoding of the key, so any non-empty key of at most
//! [`DirectoryKeyValueStorage::MAX_KEY_LEN`] bytes is valid.
//! Writes go to a temporary sibling first and are renamed into place.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::checklist::ports::{KeyValueStorage, StorageError, StorageResult};

const VALUE_SUFFIX: &str = ".kv";
const TEMP_SUFFIX: &str = ".kv.tmp";

/// Key-value storage persisted as files in a single directory.
///
/// Keys are limited to [`Self::MAX_KEY_LEN`] bytes; longer or empty keys are
/// rejected with [`StorageError::InvalidKey`] before touching the disk.
#[derive(Debug, Clone)]
pub struct DirectoryKeyValueStorage {
    dir: Arc<Dir>,
}

impl DirectoryKeyValueStorage {
    /// Longest accepted key, in bytes.
    ///
    /// Hex encoding doubles the key length and the temporary suffix must
    /// still fit within a 255-byte file name.
    pub const MAX_KEY_LEN: usize = 120;

    /// Opens `path` as the storage directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already-open directory capability.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> StorageResult<T>
    where
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(StorageError::backend)?
            .map_err(StorageError::backend)
    }
}

fn file_names(key: &str) -> StorageResult<(String, String)> {
    if key.is_empty() || key.len() > DirectoryKeyValueStorage::MAX_KEY_LEN {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }

    let encoded: String = key.bytes().map(|byte| format!("{byte:02x}")).collect();
    Ok((
        format!("{encoded}{VALUE_SUFFIX}"),
        format!("{encoded}{TEMP_SUFFIX}"),
    ))
}

#[async_trait]
impl KeyValueStorage for DirectoryKeyValueStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let (name, _) = file_names(key)?;
        self.run_blocking(move |dir| match dir.read_to_string(&name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let (name, temp_name) = file_names(key)?;
        self.run_blocking(move |dir| {
            dir.write(&temp_name, value.as_bytes())?;
            dir.rename(&temp_name, dir, &name)
        })
        .await
    }

    async fn clear(&self) -> StorageResult<()> {
        self.run_blocking(|dir| {
            for entry in dir.entries()? {
                let file_name = entry?.file_name()?;
                if file_name.ends_with(VALUE_SUFFIX) || file_name.ends_with(TEMP_SUFFIX) {
                    dir.remove_file(&file_name)?;
                }
            }
            Ok(())
        })
        .await
    }
}
