//! WorkspaceCommandService: entry points used by the CLI.

use crate::config::HugomatterConfig;
use crate::error::ApiError;
use crate::weight::{WeightExplanation, WeightResolver, WeightSettings};
use crate::workspace::apply::apply_content;
use crate::workspace::status::build_status;
use crate::workspace::types::{ApplyRequest, ApplyResult, StatusOutput};
use std::path::Path;

/// Stateless command service over a loaded configuration.
pub struct WorkspaceCommandService;

impl WorkspaceCommandService {
    /// Fill missing front matter under the content root.
    pub fn apply(config: &HugomatterConfig, request: &ApplyRequest) -> Result<ApplyResult, ApiError> {
        apply_content(config, request)
    }

    /// List content files with ordinals and weights.
    pub fn status(config: &HugomatterConfig, content_root: &Path) -> Result<StatusOutput, ApiError> {
        build_status(config, content_root)
    }

    /// Explain how the weight of a single file under `content_root` would be inferred.
    pub fn explain(
        content_root: &Path,
        file: &Path,
        settings: WeightSettings,
    ) -> Result<WeightExplanation, ApiError> {
        let mut resolver = WeightResolver::new(settings).with_content_root(content_root);
        Ok(resolver.explain(file, settings.step)?)
    }
}
