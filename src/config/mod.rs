//! Configuration
//!
//! Layered configuration loaded through the `config` crate. Precedence, lowest to
//! highest: built-in defaults, `$XDG_CONFIG_HOME/hugomatter/config.toml`, the
//! workspace `hugomatter.toml`, `HUGOMATTER__*` environment variables. CLI flags are
//! applied on top by the caller.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::weight::WeightSettings;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace config file name
pub const WORKSPACE_CONFIG_FILE: &str = "hugomatter.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HugomatterConfig {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub weight: WeightConfig,

    #[serde(default)]
    pub frontmatter: FrontmatterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HugomatterConfig {
    /// Validate value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.weight.step < 1 {
            return Err(ApiError::ConfigError(format!(
                "weight.step must be a positive integer, got {}",
                self.weight.step
            )));
        }
        if self.frontmatter.doc_type.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "frontmatter.doc_type cannot be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.frontmatter.date_format).any(|item| item == Item::Error) {
            return Err(ApiError::ConfigError(format!(
                "Invalid frontmatter.date_format: {}",
                self.frontmatter.date_format
            )));
        }
        if self.content.dir.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "content.dir cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Content root resolved against the workspace.
    pub fn content_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.content.dir)
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_ignore() -> Vec<String> {
    vec!["_index.md".to_string(), "index.md".to_string()]
}

/// Content tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content directory (relative to workspace root)
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    /// File and category names to skip
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            ignore: default_ignore(),
        }
    }
}

fn default_step() -> i64 {
    1
}

fn default_weight() -> i64 {
    999
}

/// Weight inference configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Multiplier applied to a file's own ordinal
    #[serde(default = "default_step")]
    pub step: i64,

    /// Weight used when inference fails
    #[serde(default = "default_weight")]
    pub default_weight: i64,
}

impl WeightConfig {
    pub fn settings(&self) -> WeightSettings {
        WeightSettings {
            step: self.step,
            fallback: self.default_weight,
        }
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            default_weight: default_weight(),
        }
    }
}

fn default_doc_type() -> String {
    "docs".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_true() -> bool {
    true
}

/// Author written into new front matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Default front matter fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontmatterConfig {
    /// Prefix for generated `url` values; no `url` is added when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_prefix: Option<String>,

    /// Derive `categories` from the directory path
    #[serde(default = "default_true")]
    pub categories: bool,

    /// Value for `type`
    #[serde(default = "default_doc_type")]
    pub doc_type: String,

    /// strftime format for `date`
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorConfig>,
}

impl Default for FrontmatterConfig {
    fn default() -> Self {
        Self {
            permalink_prefix: None,
            categories: default_true(),
            doc_type: default_doc_type(),
            date_format: default_date_format(),
            author: None,
        }
    }
}
