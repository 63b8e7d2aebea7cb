//! Base-weight resolution strategies
//!
//! Strategies are evaluated in priority order; the first to return
//! [`Resolution::Found`] supplies the base weight.

use crate::error::ContentError;
use crate::frontmatter::FrontmatterCache;
use crate::tree::walker::{list_children, list_markdown};
use crate::tree::ContentNode;
use crate::types::Weight;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations involved in resolving one file
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub file: &'a Path,
    pub dir: &'a Path,
    pub parent: Option<&'a Path>,
}

/// Where a base weight came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightSource {
    /// Maximum weight among the file's own directory
    LocalMaximum { dir: PathBuf, file: PathBuf },
    /// Highest-ordinal weighted file of the highest-ordinal weighted sibling directory
    SiblingDirectory { dir: PathBuf, file: PathBuf },
    /// Nothing weighted nearby
    Default,
}

/// A base weight and its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseWeight {
    pub weight: Weight,
    pub source: WeightSource,
}

/// Outcome of a single strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(BaseWeight),
    NotFound,
}

/// One step of the fallback chain
pub trait WeightStrategy {
    fn name(&self) -> &'static str;

    fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        cache: &mut FrontmatterCache,
    ) -> Result<Resolution, ContentError>;
}

/// Weighted markdown files directly inside `dir`, in name order.
fn weighted_files(
    dir: &Path,
    cache: &mut FrontmatterCache,
) -> Result<Vec<(ContentNode, Weight)>, ContentError> {
    Ok(list_markdown(dir)?
        .into_iter()
        .filter_map(|node| cache.weight(&node.path).map(|w| (node, w)))
        .collect())
}

/// Pick the highest-ordinal item; on ties the earliest (lexically smallest) wins.
fn highest_ordinal<T>(items: Vec<T>, node: impl Fn(&T) -> &ContentNode) -> Option<T> {
    let mut best: Option<T> = None;
    for item in items {
        let replace = match &best {
            Some(current) => node(&item).ordinal > node(current).ordinal,
            None => true,
        };
        if replace {
            best = Some(item);
        }
    }
    best
}

/// Base weight is the largest weight already present in the file's directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalMaximum;

impl WeightStrategy for LocalMaximum {
    fn name(&self) -> &'static str {
        "local_maximum"
    }

    fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        cache: &mut FrontmatterCache,
    ) -> Result<Resolution, ContentError> {
        let weighted = weighted_files(ctx.dir, cache)?;
        debug!(
            dir = %ctx.dir.display(),
            weighted = weighted.len(),
            "Local directory scan"
        );
        // max_by_key keeps the last maximum; iterate reversed so the first name wins ties
        let best = weighted.into_iter().rev().max_by_key(|(_, w)| *w);
        Ok(match best {
            Some((node, weight)) => Resolution::Found(BaseWeight {
                weight,
                source: WeightSource::LocalMaximum {
                    dir: ctx.dir.to_path_buf(),
                    file: node.path,
                },
            }),
            None => Resolution::NotFound,
        })
    }
}

/// Inherit from the sibling directory with the largest ordinal that has weighted files.
#[derive(Debug, Default, Clone, Copy)]
pub struct SiblingDirectory;

impl WeightStrategy for SiblingDirectory {
    fn name(&self) -> &'static str {
        "sibling_directory"
    }

    fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        cache: &mut FrontmatterCache,
    ) -> Result<Resolution, ContentError> {
        let Some(parent) = ctx.parent else {
            return Ok(Resolution::NotFound);
        };

        let mut candidates = Vec::new();
        for sibling in list_children(parent)? {
            if !sibling.is_dir() || sibling.path == ctx.dir {
                continue;
            }
            let weighted = weighted_files(&sibling.path, cache)?;
            if !weighted.is_empty() {
                candidates.push((sibling, weighted));
            }
        }
        debug!(
            parent = %parent.display(),
            candidates = candidates.len(),
            "Sibling directory scan"
        );

        let Some((dir, files)) = highest_ordinal(candidates, |(dir, _)| dir) else {
            return Ok(Resolution::NotFound);
        };
        let Some((file, weight)) = highest_ordinal(files, |(file, _)| file) else {
            return Ok(Resolution::NotFound);
        };
        Ok(Resolution::Found(BaseWeight {
            weight,
            source: WeightSource::SiblingDirectory {
                dir: dir.path,
                file: file.path,
            },
        }))
    }
}

/// Terminal strategy: base weight 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroBase;

impl WeightStrategy for ZeroBase {
    fn name(&self) -> &'static str {
        "zero_base"
    }

    fn resolve(
        &self,
        _ctx: &ResolutionContext<'_>,
        _cache: &mut FrontmatterCache,
    ) -> Result<Resolution, ContentError> {
        Ok(Resolution::Found(BaseWeight {
            weight: 0,
            source: WeightSource::Default,
        }))
    }
}

/// The standard chain: local directory, then sibling directories, then zero.
pub fn default_strategies() -> Vec<Box<dyn WeightStrategy>> {
    vec![
        Box::new(LocalMaximum),
        Box::new(SiblingDirectory),
        Box::new(ZeroBase),
    ]
}
