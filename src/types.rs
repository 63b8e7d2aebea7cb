//! Core types for the hugomatter content tooling.

/// Ordinal: numeric ordering prefix parsed from a file or directory name
pub type Ordinal = u64;

/// Weight: front matter ordering value consumed by Hugo
pub type Weight = i64;

/// Extension of content files the tooling operates on
pub const MARKDOWN_EXTENSION: &str = "md";
