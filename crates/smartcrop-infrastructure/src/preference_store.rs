//! File-backed preference store.
//!
//! Keeps the persisted language and session in `state.toml`:
//!
//! ```toml
//! farmerId = "F-1024"
//! lang = "hi"
//! token = "9f1c..."
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use smartcrop_core::error::{AdvisoryError, Result};
use smartcrop_core::state::{PreferenceStore, StorageKey};

use crate::paths::SmartCropPaths;
use crate::storage::AtomicTomlFile;

type PreferenceMap = BTreeMap<String, String>;

/// [`PreferenceStore`] persisted to a TOML file.
///
/// Every write is a locked read-modify-write of the whole file, run on the blocking
/// pool. Nothing is cached, so two stores over the same file always agree. A file that
/// does not parse reads as empty and is rewritten by the next write.
#[derive(Clone)]
pub struct TomlPreferenceStore {
    file: Arc<AtomicTomlFile<PreferenceMap>>,
}

impl TomlPreferenceStore {
    /// Opens the store at the default `state.toml` location.
    pub fn new(paths: &SmartCropPaths) -> Result<Self> {
        let path = paths
            .state_file()
            .map_err(|e| AdvisoryError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Opens the store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    async fn blocking<R, F>(&self, op: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&AtomicTomlFile<PreferenceMap>) -> Result<R> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || op(&file))
            .await
            .map_err(|e| AdvisoryError::internal(format!("Failed to join storage task: {}", e)))?
    }
}

#[async_trait]
impl PreferenceStore for TomlPreferenceStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>> {
        self.blocking(move |file| {
            let map = file.load_lenient()?.unwrap_or_default();
            Ok(map.get(key.as_str()).cloned())
        })
        .await
    }

    async fn set_many(&self, entries: &[(StorageKey, &str)]) -> Result<()> {
        let owned: Vec<(String, String)> = entries
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), (*v).to_string()))
            .collect();

        self.blocking(move |file| {
            file.update_lenient(|map| map.extend(owned))?;
            Ok(())
        })
        .await?;

        tracing::debug!(
            keys = ?entries.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "Preferences written"
        );
        Ok(())
    }

    async fn remove_many(&self, keys: &[StorageKey]) -> Result<()> {
        let owned: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();

        self.blocking(move |file| {
            file.update_lenient(|map| {
                for key in &owned {
                    map.remove(key);
                }
            })?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");

        let store = TomlPreferenceStore::with_path(&path);
        store.set(StorageKey::Lang, "pa").await.unwrap();
        store
            .set_many(&[(StorageKey::Token, "tok"), (StorageKey::FarmerId, "F-1")])
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("farmerId = \"F-1\""));
        assert!(content.contains("lang = \"pa\""));

        let reopened = TomlPreferenceStore::with_path(&path);
        assert_eq!(
            reopened.get(StorageKey::Token).await.unwrap().as_deref(),
            Some("tok")
        );
    }

    #[tokio::test]
    async fn test_remove_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join("state.toml"));

        store.set(StorageKey::Lang, "ta").await.unwrap();
        store.set(StorageKey::Token, "tok").await.unwrap();
        store
            .remove_many(&[StorageKey::Token, StorageKey::FarmerId])
            .await
            .unwrap();

        assert_eq!(store.get(StorageKey::Token).await.unwrap(), None);
        assert_eq!(
            store.get(StorageKey::Lang).await.unwrap().as_deref(),
            Some("ta")
        );
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join("absent.toml"));
        assert_eq!(store.get(StorageKey::Lang).await.unwrap(), None);
    }
}
