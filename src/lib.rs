//! Hugomatter: Front Matter and Ordering Weights for Hugo Content
//!
//! Fills in missing Hugo front matter and infers each page's `weight` from the
//! numeric prefixes of file and directory names, so sidebars keep the order of
//! the content tree without hand-maintained weights.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod weight;
pub mod workspace;
