//! Content node types

use crate::tree::ordinal::extract_ordinal;
use crate::types::{Ordinal, MARKDOWN_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Node kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// A file or directory in the content tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub name: String,
    pub ordinal: Ordinal,
    pub path: PathBuf,
    pub kind: NodeKind,
}

impl ContentNode {
    /// Build a node for `path`; the name is its final component.
    pub fn new(path: PathBuf, kind: NodeKind) -> Self {
        let name = file_name_of(&path);
        Self {
            ordinal: extract_ordinal(&name),
            name,
            path,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Markdown content file (`*.md`)
    pub fn is_markdown(&self) -> bool {
        self.kind == NodeKind::File && is_markdown_path(&self.path)
    }
}

/// Final path component as a lossy string, empty for paths like `/`.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}
