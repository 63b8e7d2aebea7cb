//! Batch application of default front matter across a content tree.

use crate::config::HugomatterConfig;
use crate::error::{ApiError, ContentError};
use crate::frontmatter::{numeric_weight, DefaultFields, Document, FrontmatterRecord, WEIGHT_KEY};
use crate::tree::walker::{discover_markdown, WalkerConfig};
use crate::weight::WeightResolver;
use crate::workspace::types::{ApplyRequest, ApplyResult, FileOutcome};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Canonical content root, or `ContentDirMissing`.
pub(crate) fn canonical_content_root(content_root: &Path) -> Result<PathBuf, ApiError> {
    if !content_root.is_dir() {
        return Err(ApiError::ContentDirMissing(content_root.to_path_buf()));
    }
    dunce::canonicalize(content_root).map_err(|source| {
        ApiError::Content(ContentError::Canonicalize {
            path: content_root.to_path_buf(),
            source,
        })
    })
}

pub(crate) fn walker_config(config: &HugomatterConfig) -> WalkerConfig {
    WalkerConfig {
        ignore_names: config.content.ignore.clone(),
    }
}

/// Fill missing front matter for every markdown file under the content root.
///
/// Files are processed in name order. A file that fails is reported and left
/// untouched; the batch continues.
pub fn apply_content(
    config: &HugomatterConfig,
    request: &ApplyRequest,
) -> Result<ApplyResult, ApiError> {
    let root = canonical_content_root(&request.content_root)?;
    let files = discover_markdown(&root, &walker_config(config))?;

    let defaults = DefaultFields::new(&config.frontmatter, &root, &config.content.ignore);
    let mut resolver = WeightResolver::new(request.settings).with_content_root(root.clone());
    let mut result = ApplyResult::new(root.display().to_string(), request.dry_run);

    for path in &files {
        let outcome = match apply_file(path, &defaults, &mut resolver, request.dry_run) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to process file");
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        result.push(defaults.relative_path(path), outcome);
    }

    info!(
        total = result.total(),
        updated = result.updated,
        unchanged = result.unchanged,
        failed = result.failed,
        dry_run = request.dry_run,
        "Apply complete"
    );
    Ok(result)
}

fn apply_file(
    path: &Path,
    defaults: &DefaultFields<'_>,
    resolver: &mut WeightResolver,
    dry_run: bool,
) -> Result<FileOutcome, ApiError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc = Document::parse(&content).map_err(|source| ApiError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = resolver.settings();
    let added = defaults.fill(&mut doc, path, || {
        resolver.resolve(path, settings.step, settings.fallback)
    })?;
    if added.is_empty() {
        return Ok(FileOutcome::Unchanged);
    }

    let weight = if added.contains(&WEIGHT_KEY) {
        doc.get(WEIGHT_KEY).and_then(numeric_weight)
    } else {
        None
    };
    let rendered = doc.render().map_err(|source| ApiError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    if !dry_run {
        std::fs::write(path, rendered).map_err(|source| ContentError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }
    // Later files must see this file's new weight, in dry runs as well.
    resolver
        .cache_mut()
        .insert(path.to_path_buf(), FrontmatterRecord::from_fields(doc.fields));

    info!(path = %path.display(), added = ?added, weight = ?weight, dry_run, "Updated front matter");
    Ok(FileOutcome::Updated {
        added: added.iter().map(|k| k.to_string()).collect(),
        weight,
    })
}
