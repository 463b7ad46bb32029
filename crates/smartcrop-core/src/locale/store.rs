//! Active-language store.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::error::Result;
use crate::locale::{Dictionary, Language, dictionary};
use crate::state::{PreferenceStore, StorageKey};

/// Holds the active language and persists every change.
///
/// Consumers that need to re-resolve their dictionary on change hold a receiver from
/// [`LocaleStore::subscribe`].
pub struct LocaleStore {
    storage: Arc<dyn PreferenceStore>,
    current: watch::Sender<Language>,
    /// Serializes `set` so the in-memory value and the persisted one agree.
    write_lock: Mutex<()>,
}

impl LocaleStore {
    /// Restores the active language from storage.
    ///
    /// A missing or unsupported persisted code falls back to the default language;
    /// the stored value is left as-is until the next `set`.
    pub async fn restore(storage: Arc<dyn PreferenceStore>) -> Result<Self> {
        let language = match storage.get(StorageKey::Lang).await? {
            Some(code) => Language::from_code(&code).unwrap_or_else(|err| {
                tracing::warn!("Ignoring persisted language: {}", err);
                Language::default()
            }),
            None => Language::default(),
        };

        let (current, _) = watch::channel(language);
        Ok(Self {
            storage,
            current,
            write_lock: Mutex::new(()),
        })
    }

    pub fn get(&self) -> Language {
        *self.current.borrow()
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        dictionary(self.get())
    }

    /// Validates, persists, then publishes a new active language.
    ///
    /// An unsupported code is rejected before storage is touched.
    pub async fn set(&self, code: &str) -> Result<Language> {
        let language = Language::from_code(code)?;

        let _guard = self.write_lock.lock().await;
        self.storage.set(StorageKey::Lang, language.code()).await?;
        self.current.send_replace(language);

        tracing::info!(language = language.code(), "Active language changed");
        Ok(language)
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryPreferenceStore;

    #[tokio::test]
    async fn test_restore_defaults_to_english() {
        let store = LocaleStore::restore(Arc::new(MemoryPreferenceStore::new()))
            .await
            .unwrap();
        assert_eq!(store.get(), Language::En);
        assert_eq!(store.dictionary().login, "Login");
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_code() {
        let storage = Arc::new(MemoryPreferenceStore::with_entries([(StorageKey::Lang, "ta")]));
        let store = LocaleStore::restore(storage).await.unwrap();
        assert_eq!(store.get(), Language::Ta);
    }

    #[tokio::test]
    async fn test_restore_ignores_unsupported_code() {
        let storage = Arc::new(MemoryPreferenceStore::with_entries([(StorageKey::Lang, "xx")]));
        let store = LocaleStore::restore(storage).await.unwrap();
        assert_eq!(store.get(), Language::En);
    }

    #[tokio::test]
    async fn test_set_persists_and_notifies() {
        let storage = Arc::new(MemoryPreferenceStore::new());
        let store = LocaleStore::restore(storage.clone()).await.unwrap();
        let mut rx = store.subscribe();

        store.set("hi").await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::Hi);
        assert_eq!(store.dictionary().logout, "लॉगआउट");
        assert_eq!(
            storage.get(StorageKey::Lang).await.unwrap().as_deref(),
            Some("hi")
        );
    }

    #[tokio::test]
    async fn test_unsupported_code_is_not_persisted() {
        let storage = Arc::new(MemoryPreferenceStore::new());
        let store = LocaleStore::restore(storage.clone()).await.unwrap();

        let err = store.set("klingon").await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(store.get(), Language::En);
        assert_eq!(storage.get(StorageKey::Lang).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rapid_switches_last_write_wins() {
        let storage = Arc::new(MemoryPreferenceStore::new());
        let store = LocaleStore::restore(storage.clone()).await.unwrap();

        store.set("en").await.unwrap();
        store.set("hi").await.unwrap();

        assert_eq!(store.get(), Language::Hi);
        assert_eq!(
            storage.get(StorageKey::Lang).await.unwrap().as_deref(),
            Some("hi")
        );

        let reloaded = LocaleStore::restore(storage).await.unwrap();
        assert_eq!(reloaded.get(), Language::Hi);
    }
}
