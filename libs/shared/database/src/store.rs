use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Database(err.to_string())
    }
}

// Every read-modify-write of the store file in this process goes through here.
fn file_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// A key/value store of JSON-encoded strings persisted to a single file.
///
/// Values are opaque blobs keyed by namespaced strings. Entries that fail to
/// decode are dropped and read back as absent.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(config: &AppConfig) -> Self {
        Self::at(&config.storage_path)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Discarding unreadable store file {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        debug!("Persisted {} store entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = file_lock().lock().await;
        Ok(self.load().await?.get(key).cloned())
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        let _guard = file_lock().lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    /// Decode the value under `key`. A value that does not decode as `T` is
    /// removed and reported as absent.
    pub async fn get_json<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let _guard = file_lock().lock().await;
        let mut entries = self.load().await?;

        let Some(raw) = entries.get(key) else {
            return Ok(None);
        };

        match serde_json::from_str(raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Failed to parse stored value for {}, clearing it: {}", key, e);
                entries.remove(key);
                self.persist(&entries).await?;
                Ok(None)
            }
        }
    }

    pub async fn set_json<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let encoded = serde_json::to_string(value)?;
        self.set_item(key, encoded).await
    }

    /// Read-modify-write of one JSON value under the store lock.
    ///
    /// Absent or corrupt values start from `T::default()`. The value is only
    /// written back when `f` succeeds.
    pub async fn update_json<T, R, E, F>(&self, key: &str, f: F) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned + Default,
        E: From<StoreError>,
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        let _guard = file_lock().lock().await;
        let mut entries = self.load().await?;

        let mut value: T = match entries.get(key) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                warn!("Failed to parse stored value for {}, starting empty: {}", key, e);
                T::default()
            }),
            None => T::default(),
        };

        let result = f(&mut value)?;

        let encoded = serde_json::to_string(&value).map_err(StoreError::from)?;
        entries.insert(key.to_string(), encoded);
        self.persist(&entries).await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Entry {
        name: String,
    }

    fn store_in(dir: &TempDir) -> LocalStore {
        LocalStore::at(dir.path().join("nested").join("store.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get_item("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn json_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .set_json("entry", &Entry { name: "Priya".into() })
            .await
            .unwrap();

        let reopened = LocalStore::at(store.path());
        let entry: Option<Entry> = reopened.get_json("entry").await.unwrap();
        assert_eq!(entry, Some(Entry { name: "Priya".into() }));
    }

    #[tokio::test]
    async fn corrupt_value_is_cleared() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set_item("entry", "{not json".to_string()).await.unwrap();

        let entry: Option<Entry> = store.get_json("entry").await.unwrap();
        assert_eq!(entry, None);
        assert_eq!(store.get_item("entry").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap()).await.unwrap();
        tokio::fs::write(store.path(), "garbage").await.unwrap();

        assert_eq!(store.get_item("entry").await.unwrap(), None);
        store.set_item("entry", "\"ok\"".to_string()).await.unwrap();
        assert_eq!(store.get_item("entry").await.unwrap(), Some("\"ok\"".to_string()));
    }

    #[tokio::test]
    async fn update_json_only_writes_on_success() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let pushed: Result<usize, StoreError> = store
            .update_json("list", |list: &mut Vec<String>| {
                list.push("one".into());
                Ok(list.len())
            })
            .await;
        assert_matches!(pushed, Ok(1));

        #[derive(Debug)]
        enum Rejected {
            Store,
            No,
        }
        impl From<StoreError> for Rejected {
            fn from(_: StoreError) -> Self {
                Rejected::Store
            }
        }

        let rejected: Result<(), Rejected> = store
            .update_json("list", |list: &mut Vec<String>| {
                list.push("two".into());
                Err(Rejected::No)
            })
            .await;
        assert_matches!(rejected, Err(Rejected::No));

        let list: Option<Vec<String>> = store.get_json("list").await.unwrap();
        assert_eq!(list, Some(vec!["one".to_string()]));
    }
}
