//! Per-resolver read cache of parsed front matter, keyed by path.

use crate::frontmatter::FrontmatterRecord;
use crate::types::Weight;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Front matter read cache
///
/// Not synchronized: owned by a single resolver and used from one thread.
#[derive(Debug, Default)]
pub struct FrontmatterCache {
    entries: HashMap<PathBuf, FrontmatterRecord>,
    stats: CacheStats,
}

impl FrontmatterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached record for `path`, reading the file on first access.
    ///
    /// Unreadable files are cached as empty records.
    pub fn record(&mut self, path: &Path) -> &FrontmatterRecord {
        if self.entries.contains_key(path) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            let record = FrontmatterRecord::load(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Treating unreadable file as unweighted");
                FrontmatterRecord::default()
            });
            self.entries.insert(path.to_path_buf(), record);
        }
        &self.entries[path]
    }

    pub fn weight(&mut self, path: &Path) -> Option<Weight> {
        self.record(path).weight
    }

    /// Store a record directly, e.g. after the caller rewrote the file.
    pub fn insert(&mut self, path: PathBuf, record: FrontmatterRecord) {
        self.entries.insert(path, record);
    }

    /// Drop the entry for `path`; returns whether one was present.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
