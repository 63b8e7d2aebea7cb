//! User-level config file source: $XDG_CONFIG_HOME/hugomatter/config.toml

use crate::config::paths::global_config_path;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file when its location can be determined.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Ok(path) => Ok(builder.add_source(File::from(path).required(false))),
        Err(e) => {
            tracing::debug!(error = %e, "No global config location");
            Ok(builder)
        }
    }
}
