//! Content status: every markdown file with its ordinal and current weight.

use crate::config::HugomatterConfig;
use crate::error::{ApiError, ContentError};
use crate::frontmatter::{Document, FrontmatterRecord};
use crate::tree::walker::discover_markdown;
use crate::tree::{extract_ordinal, node::file_name_of};
use crate::workspace::apply::{canonical_content_root, walker_config};
use crate::workspace::types::{StatusEntry, StatusOutput};
use std::path::Path;

/// Build the status listing for a content root.
pub fn build_status(
    config: &HugomatterConfig,
    content_root: &Path,
) -> Result<StatusOutput, ApiError> {
    let root = canonical_content_root(content_root)?;
    let files = discover_markdown(&root, &walker_config(config))?;

    let mut entries = Vec::with_capacity(files.len());
    for path in &files {
        let rel = path
            .strip_prefix(&root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let ordinal = extract_ordinal(&file_name_of(path));
        let (weight, error) = match read_weight(path) {
            Ok(weight) => (weight, None),
            Err(e) => (None, Some(e.to_string())),
        };
        entries.push(StatusEntry {
            path: rel,
            ordinal,
            weight,
            error,
        });
    }

    let weighted_count = entries.iter().filter(|e| e.weight.is_some()).count();
    Ok(StatusOutput {
        content_root: root.display().to_string(),
        total: entries.len(),
        weighted_count,
        entries,
    })
}

fn read_weight(path: &Path) -> Result<Option<i64>, ApiError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = Document::parse(&content).map_err(|source| ApiError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FrontmatterRecord::from_fields(doc.fields).weight)
}
