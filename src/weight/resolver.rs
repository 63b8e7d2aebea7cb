//! WeightResolver: infer an ordering weight for a content file from its neighbours.

use crate::error::ContentError;
use crate::frontmatter::FrontmatterCache;
use crate::tree::ordinal::extract_ordinal;
use crate::types::{Ordinal, Weight};
use crate::weight::strategies::{
    default_strategies, BaseWeight, Resolution, ResolutionContext, WeightSource, WeightStrategy,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Step and fallback applied to every resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightSettings {
    /// Multiplier for the file's own ordinal (positive)
    pub step: Weight,
    /// Returned when resolution fails
    pub fallback: Weight,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            step: 1,
            fallback: 999,
        }
    }
}

/// Full account of one resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightExplanation {
    pub file: PathBuf,
    pub ordinal: Ordinal,
    pub step: Weight,
    pub base: BaseWeight,
    /// Name of the strategy that supplied the base
    pub strategy: &'static str,
    pub weight: Weight,
}

/// Resolves weights through an ordered strategy chain, caching front matter reads.
pub struct WeightResolver {
    strategies: Vec<Box<dyn WeightStrategy>>,
    cache: FrontmatterCache,
    settings: WeightSettings,
    content_root: Option<PathBuf>,
}

impl WeightResolver {
    pub fn new(settings: WeightSettings) -> Self {
        Self::with_strategies(settings, default_strategies())
    }

    pub fn with_strategies(
        settings: WeightSettings,
        strategies: Vec<Box<dyn WeightStrategy>>,
    ) -> Self {
        Self {
            strategies,
            cache: FrontmatterCache::new(),
            settings,
            content_root: None,
        }
    }

    /// Bound every directory read to the tree under `root`.
    ///
    /// Files outside the root resolve to the fallback, and a file directly in the
    /// root has no sibling directories to inherit from.
    pub fn with_content_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.content_root = Some(root.into());
        self
    }

    pub fn settings(&self) -> WeightSettings {
        self.settings
    }

    pub fn cache_mut(&mut self) -> &mut FrontmatterCache {
        &mut self.cache
    }

    /// Resolve with the resolver's own settings.
    pub fn resolve_default(&mut self, file: &Path) -> Weight {
        let WeightSettings { step, fallback } = self.settings;
        self.resolve(file, step, fallback)
    }

    /// Weight for `file`; any failure yields `fallback`.
    pub fn resolve(&mut self, file: &Path, step: Weight, fallback: Weight) -> Weight {
        match self.explain(file, step) {
            Ok(explanation) => explanation.weight,
            Err(e) => {
                warn!(
                    file = %file.display(),
                    error = %e,
                    fallback,
                    "Weight resolution failed, using fallback"
                );
                fallback
            }
        }
    }

    /// Compute the weight for `file` and report how it was derived.
    pub fn explain(&mut self, file: &Path, step: Weight) -> Result<WeightExplanation, ContentError> {
        let absolute = absolute_path(file)?;
        self.cache.invalidate(&absolute);

        if !absolute.is_file() {
            return Err(ContentError::NotAFile(absolute));
        }
        let Some(dir) = absolute.parent() else {
            return Err(ContentError::NotAFile(absolute.clone()));
        };
        let parent = match &self.content_root {
            Some(root) => {
                let root = absolute_path(root)?;
                if !dir.starts_with(&root) {
                    return Err(ContentError::OutsideContentRoot {
                        path: absolute.clone(),
                        root,
                    });
                }
                if dir == root {
                    None
                } else {
                    dir.parent()
                }
            }
            None => dir.parent(),
        };
        let ctx = ResolutionContext {
            file: &absolute,
            dir,
            parent,
        };

        let mut found = None;
        for strategy in &self.strategies {
            match strategy.resolve(&ctx, &mut self.cache)? {
                Resolution::Found(base) => {
                    found = Some((strategy.name(), base));
                    break;
                }
                Resolution::NotFound => {
                    debug!(strategy = strategy.name(), "No base weight");
                }
            }
        }
        let (strategy, base) = found.unwrap_or((
            "none",
            BaseWeight {
                weight: 0,
                source: WeightSource::Default,
            },
        ));

        let name = absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ordinal = extract_ordinal(&name);
        let weight = combine(base.weight, ordinal, step)?;

        debug!(
            file = %absolute.display(),
            base = base.weight,
            ordinal,
            step,
            weight,
            strategy,
            "Resolved weight"
        );

        Ok(WeightExplanation {
            file: absolute,
            ordinal,
            step,
            base,
            strategy,
            weight,
        })
    }
}

/// `base + ordinal * step`, checked.
fn combine(base: Weight, ordinal: Ordinal, step: Weight) -> Result<Weight, ContentError> {
    Weight::try_from(ordinal)
        .ok()
        .and_then(|o| o.checked_mul(step))
        .and_then(|offset| base.checked_add(offset))
        .ok_or(ContentError::WeightOverflow {
            base,
            ordinal,
            step,
        })
}

/// Canonical path of an existing entry; fails when it or its directory is gone.
fn absolute_path(file: &Path) -> Result<PathBuf, ContentError> {
    dunce::canonicalize(file).map_err(|source| ContentError::Canonicalize {
        path: file.to_path_buf(),
        source,
    })
}
