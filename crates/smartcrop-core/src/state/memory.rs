//! In-memory preference store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::state::model::StorageKey;
use crate::state::repository::PreferenceStore;

/// A [`PreferenceStore`] that lives only as long as the process.
///
/// Used by tests and by callers that run without a config directory. Cloning the
/// `Arc` around it and building a second store from it simulates a restart.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        let values = entries.into_iter().map(|(k, v)| (k, v.into())).collect();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.values.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.lock().await.is_empty()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(&key).cloned())
    }

    async fn set_many(&self, entries: &[(StorageKey, &str)]) -> Result<()> {
        let mut values = self.values.lock().await;
        for (key, value) in entries {
            values.insert(*key, (*value).to_string());
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[StorageKey]) -> Result<()> {
        let mut values = self.values.lock().await;
        for key in keys {
            values.remove(key);
        }
        Ok(())
    }
}
