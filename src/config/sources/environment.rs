//! Environment variable source: HUGOMATTER__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment variable prefix for config keys
pub const ENV_PREFIX: &str = "HUGOMATTER";

/// Add environment variable overlay to builder.
/// Uses HUGOMATTER__ prefix and __ as separator for nested keys,
/// e.g. `HUGOMATTER__WEIGHT__STEP=10`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
