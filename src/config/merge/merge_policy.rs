//! Base builder carrying built-in defaults as the lowest-precedence layer.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the defaults every later source overrides.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("content.dir", "content")?
        .set_default("weight.step", 1)?
        .set_default("weight.default_weight", 999)?
        .set_default("frontmatter.doc_type", "docs")?
        .set_default("frontmatter.categories", true)
}
