pub mod config_service;
pub mod paths;
pub mod preference_store;
pub mod storage;
pub mod upload;

pub use crate::config_service::ConfigService;
pub use crate::paths::SmartCropPaths;
pub use crate::preference_store::TomlPreferenceStore;
