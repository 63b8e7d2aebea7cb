//! Directory listing and content discovery

use crate::error::ContentError;
use crate::tree::node::{file_name_of, is_markdown_path, ContentNode, NodeKind};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walker configuration for content discovery
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File names skipped during discovery (exact match)
    pub ignore_names: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_names: vec!["_index.md".to_string(), "index.md".to_string()],
        }
    }
}

/// List the immediate children of `dir`, sorted by name.
///
/// Symlinks are followed. Entries whose metadata cannot be read (dangling links)
/// are skipped; failure to read `dir` itself is an error.
pub fn list_children(dir: &Path) -> Result<Vec<ContentNode>, ContentError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ContentError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut nodes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ContentError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let kind = if metadata.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        nodes.push(ContentNode::new(path, kind));
    }
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(nodes)
}

/// Markdown files directly inside `dir`, sorted by name.
pub fn list_markdown(dir: &Path) -> Result<Vec<ContentNode>, ContentError> {
    Ok(list_children(dir)?
        .into_iter()
        .filter(ContentNode::is_markdown)
        .collect())
}

/// Recursively collect markdown files under `root` in file-name order, following symlinks.
pub fn discover_markdown(root: &Path, config: &WalkerConfig) -> Result<Vec<PathBuf>, ContentError> {
    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown_path(entry.path()) {
            continue;
        }
        let name = file_name_of(entry.path());
        if config.ignore_names.iter().any(|ignored| *ignored == name) {
            debug!(path = %entry.path().display(), "Ignoring content file");
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}
