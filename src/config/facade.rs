//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::HugomatterConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment, then validate it.
    pub fn load(workspace_root: &Path) -> Result<HugomatterConfig, ApiError> {
        let config = MergeService::load(workspace_root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then validate it.
    pub fn load_from_file(path: &Path) -> Result<HugomatterConfig, ApiError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> HugomatterConfig {
        HugomatterConfig::default()
    }
}
