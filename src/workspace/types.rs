//! Shared types for workspace commands and status.

use crate::types::{Ordinal, Weight};
use crate::weight::WeightSettings;
use serde::Serialize;
use std::path::PathBuf;

/// Parameters for the apply command.
#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub content_root: PathBuf,
    pub settings: WeightSettings,
    pub dry_run: bool,
}

/// What happened to one file during apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Updated {
        added: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<Weight>,
    },
    Unchanged,
    Failed {
        reason: String,
    },
}

/// One row of the apply report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path relative to the content root
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Result of the apply command.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyResult {
    pub content_root: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl ApplyResult {
    pub fn new(content_root: String, dry_run: bool) -> Self {
        Self {
            content_root,
            dry_run,
            files: Vec::new(),
            updated: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    pub fn push(&mut self, path: String, outcome: FileOutcome) {
        match &outcome {
            FileOutcome::Updated { .. } => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.files.push(FileReport { path, outcome });
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// One row for the status table / JSON.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    pub path: String,
    pub ordinal: Ordinal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status output for JSON.
#[derive(Debug, Clone, Serialize)]
pub struct StatusOutput {
    pub content_root: String,
    pub entries: Vec<StatusEntry>,
    pub total: usize,
    pub weighted_count: usize,
}
