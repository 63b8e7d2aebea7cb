//! Public surface of the workspace domain.

pub use super::commands::WorkspaceCommandService;
pub use super::format::{
    format_apply_result_text, format_explanation_text, format_section_heading,
    format_status_text,
};
pub use super::types::{
    ApplyRequest, ApplyResult, FileOutcome, FileReport, StatusEntry, StatusOutput,
};
