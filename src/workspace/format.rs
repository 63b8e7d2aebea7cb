//! Format apply, status, and weight explanations as text.

use crate::weight::{WeightExplanation, WeightSource};
use crate::workspace::types::{ApplyResult, FileOutcome, StatusOutput};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the apply report as human-readable text.
pub fn format_apply_result_text(result: &ApplyResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Front matter")));
    out.push_str(&format!("  Content root: {}\n\n", result.content_root));

    if result.files.is_empty() {
        out.push_str("No markdown files found.\n");
        return out;
    }

    let changed: Vec<_> = result
        .files
        .iter()
        .filter(|f| f.outcome != FileOutcome::Unchanged)
        .collect();
    if !changed.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Status", "Added", "Weight"]);
        for row in changed {
            match &row.outcome {
                FileOutcome::Updated { added, weight } => {
                    table.add_row(vec![
                        row.path.clone(),
                        "updated".to_string(),
                        added.join(", "),
                        weight.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                FileOutcome::Failed { reason } => {
                    table.add_row(vec![
                        row.path.clone(),
                        "failed".to_string(),
                        reason.clone(),
                        "-".to_string(),
                    ]);
                }
                FileOutcome::Unchanged => {}
            }
        }
        out.push_str(&format!("{}\n\n", table));
    }

    out.push_str(&format!(
        "Total: {} files, {} updated, {} unchanged, {} failed.\n",
        result.total(),
        result.updated,
        result.unchanged,
        result.failed
    ));
    if result.dry_run {
        out.push_str("Dry run: no files were written.\n");
    }
    out
}

/// Format content status as human-readable text.
pub fn format_status_text(status: &StatusOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Content Status")));
    out.push_str(&format!("  Content root: {}\n\n", status.content_root));
    if status.entries.is_empty() {
        out.push_str("No markdown files found.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Ordinal", "Weight"]);
    for row in &status.entries {
        let weight = match (&row.weight, &row.error) {
            (Some(w), _) => w.to_string(),
            (None, Some(_)) => "error".to_string(),
            (None, None) => "-".to_string(),
        };
        table.add_row(vec![row.path.clone(), row.ordinal.to_string(), weight]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} files, {} weighted.\n",
        status.total, status.weighted_count
    ));
    out
}

/// Describe a weight resolution step by step.
pub fn format_explanation_text(explanation: &WeightExplanation) -> String {
    let source = match &explanation.base.source {
        WeightSource::LocalMaximum { file, .. } => {
            format!("largest weight in own directory ({})", file_name(file))
        }
        WeightSource::SiblingDirectory { dir, file } => format!(
            "sibling directory {} ({})",
            file_name(dir),
            file_name(file)
        ),
        WeightSource::Default => "no weighted neighbours".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Weight")));
    out.push_str(&format!("  File: {}\n", explanation.file.display()));
    out.push_str(&format!("  Ordinal: {}\n", explanation.ordinal));
    out.push_str(&format!(
        "  Base weight: {} ({})\n",
        explanation.base.weight, source
    ));
    out.push_str(&format!(
        "  Formula: {} + ({} * {}) = {}\n",
        explanation.base.weight, explanation.ordinal, explanation.step, explanation.weight
    ));
    out.push_str(&format!("  Weight: {}\n", explanation.weight));
    out
}
