//! Preference storage trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::StorageKey;

/// Durable string key-value storage for client preferences.
///
/// Every write must be durable when the returned future completes. Multi-key writes
/// are applied as one unit so readers never observe half of them.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: StorageKey) -> Result<Option<String>>;

    async fn set(&self, key: StorageKey, value: &str) -> Result<()> {
        self.set_many(&[(key, value)]).await
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        self.remove_many(&[key]).await
    }

    /// Writes several keys in one durable step.
    async fn set_many(&self, entries: &[(StorageKey, &str)]) -> Result<()>;

    /// Removes several keys in one durable step. Missing keys are ignored.
    async fn remove_many(&self, keys: &[StorageKey]) -> Result<()>;
}
