//! Persisted client preferences.
//!
//! The client keeps exactly three string values across restarts: the active language,
//! the session token and the farmer identifier.

pub mod memory;
pub mod model;
pub mod repository;

pub use memory::MemoryPreferenceStore;
pub use model::StorageKey;
pub use repository::PreferenceStore;
