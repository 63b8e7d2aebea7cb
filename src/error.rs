//! Error types for content traversal, front matter handling, and the CLI surface.

use crate::types::{Ordinal, Weight};
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem and arithmetic failures while walking a content tree
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve path {path:?}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a content file: {0:?}")]
    NotAFile(PathBuf),

    #[error("{path:?} is outside the content root {root:?}")]
    OutsideContentRoot { path: PathBuf, root: PathBuf },

    #[error("Weight overflow: {base} + ({ordinal} * {step})")]
    WeightOverflow {
        base: Weight,
        ordinal: Ordinal,
        step: Weight,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Failures splitting or parsing a front matter block
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Front matter block is not terminated by a closing '---' line")]
    Unterminated,

    #[error("Invalid YAML in front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Front matter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("Unsupported front matter format: {0}")]
    UnsupportedFormat(&'static str),
}

/// Top-level error surfaced by commands
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Content directory not found: {0:?}")]
    ContentDirMissing(PathBuf),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("{path:?}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}
