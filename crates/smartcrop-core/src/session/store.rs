//! Session store backed by preference storage.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::Result;
use crate::session::model::Session;
use crate::state::{PreferenceStore, StorageKey};

/// Process-wide holder of the current [`Session`].
///
/// Writes go to storage first and only then to memory, so a failed write leaves the
/// in-memory session unchanged.
pub struct SessionStore {
    storage: Arc<dyn PreferenceStore>,
    session: RwLock<Session>,
}

impl SessionStore {
    /// Restores the session persisted by a previous run.
    pub async fn restore(storage: Arc<dyn PreferenceStore>) -> Result<Self> {
        let token = storage.get(StorageKey::Token).await?.unwrap_or_default();
        let farmer_id = storage.get(StorageKey::FarmerId).await?.unwrap_or_default();
        let session = Session { token, farmer_id };

        if session.is_degraded() {
            tracing::warn!("Restored session has a token but no farmer id");
        }

        Ok(Self {
            storage,
            session: RwLock::new(session),
        })
    }

    pub async fn current(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token().map(str::to_string)
    }

    /// Overwrites and persists both fields. The token shape is not checked.
    pub async fn login(&self, token: &str, farmer_id: &str) -> Result<()> {
        let mut session = self.session.write().await;
        self.storage
            .set_many(&[(StorageKey::Token, token), (StorageKey::FarmerId, farmer_id)])
            .await?;
        *session = Session::new(token, farmer_id);

        tracing::info!(farmer_id, "Logged in");
        Ok(())
    }

    /// Clears both fields in memory and in storage.
    pub async fn logout(&self) -> Result<()> {
        let mut session = self.session.write().await;
        self.storage
            .remove_many(&[StorageKey::Token, StorageKey::FarmerId])
            .await?;
        *session = Session::empty();

        tracing::info!("Logged out");
        Ok(())
    }
}
