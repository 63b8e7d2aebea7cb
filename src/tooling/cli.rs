//! CLI Tooling
//!
//! Command-line interface for hugomatter. Every command is workspace-scoped and
//! idempotent: running `apply` twice leaves the second run with nothing to do.

use crate::config::{ConfigLoader, HugomatterConfig};
use crate::error::ApiError;
use crate::logging::{LoggingConfig, LoggingOverrides};
use crate::weight::WeightSettings;
use crate::workspace::{
    format_apply_result_text, format_explanation_text, format_status_text, ApplyRequest,
    WorkspaceCommandService,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// hugomatter CLI - front matter and ordering weights for Hugo content
#[derive(Parser)]
#[command(name = "hugomatter")]
#[command(about = "Fill in Hugo front matter and infer ordering weights from content names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (the Hugo site root)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level unless --log-level is given)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging overrides carried by the global flags.
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add missing front matter (including inferred weights) to every content file
    Apply {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Weight step per ordinal (overrides config)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        step: Option<i64>,
        /// Weight used when inference fails (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        default_weight: Option<i64>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Explain the weight that would be inferred for one file
    Weight {
        /// Content file to resolve
        file: PathBuf,
        /// Weight step per ordinal (overrides config)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        step: Option<i64>,
        /// Weight used when inference fails (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        default_weight: Option<i64>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List content files with their ordinals and weights
    Status {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Weight resolution result for JSON output; `resolved` is false when the fallback was used.
#[derive(Debug, Serialize)]
struct WeightOutput {
    file: PathBuf,
    weight: i64,
    resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<crate::weight::WeightExplanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// CLI context for managing workspace state
pub struct CliContext {
    workspace_root: PathBuf,
    config: HugomatterConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create a context from an already loaded configuration
    pub fn with_config(workspace_root: PathBuf, config: HugomatterConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &HugomatterConfig {
        &self.config
    }

    /// Logging configuration from the config file with CLI overrides applied
    pub fn logging_config(&self, overrides: &LoggingOverrides) -> LoggingConfig {
        self.config.logging.clone().with_overrides(overrides)
    }

    fn weight_settings(&self, step: Option<i64>, default_weight: Option<i64>) -> WeightSettings {
        let mut settings = self.config.weight.settings();
        if let Some(step) = step {
            settings.step = step;
        }
        if let Some(fallback) = default_weight {
            settings.fallback = fallback;
        }
        settings
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), workspace = %self.workspace_root.display(), "Executing command");
        match command {
            Commands::Apply {
                dry_run,
                step,
                default_weight,
                format,
            } => {
                let request = ApplyRequest {
                    content_root: self.config.content_root(&self.workspace_root),
                    settings: self.weight_settings(*step, *default_weight),
                    dry_run: *dry_run,
                };
                let result = WorkspaceCommandService::apply(&self.config, &request)?;
                match format {
                    OutputFormat::Json => to_json(&result),
                    OutputFormat::Text => Ok(format_apply_result_text(&result)),
                }
            }
            Commands::Weight {
                file,
                step,
                default_weight,
                format,
            } => self.handle_weight(file, self.weight_settings(*step, *default_weight), *format),
            Commands::Status { format } => {
                let status = WorkspaceCommandService::status(
                    &self.config,
                    &self.config.content_root(&self.workspace_root),
                )?;
                match format {
                    OutputFormat::Json => to_json(&status),
                    OutputFormat::Text => Ok(format_status_text(&status)),
                }
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::Serialization(e.to_string())),
        }
    }

    /// Resolve one file; failures report the fallback weight rather than an error.
    fn handle_weight(
        &self,
        file: &Path,
        settings: WeightSettings,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.workspace_root.join(file)
        };
        let content_root = self.config.content_root(&self.workspace_root);
        let output = match WorkspaceCommandService::explain(&content_root, &file, settings) {
            Ok(explanation) => WeightOutput {
                file: file.clone(),
                weight: explanation.weight,
                resolved: true,
                explanation: Some(explanation),
                error: None,
            },
            Err(e) => WeightOutput {
                file: file.clone(),
                weight: settings.fallback,
                resolved: false,
                explanation: None,
                error: Some(e.to_string()),
            },
        };

        match format {
            OutputFormat::Json => to_json(&output),
            OutputFormat::Text => Ok(match (&output.explanation, &output.error) {
                (Some(explanation), _) => format_explanation_text(explanation),
                (None, error) => format!(
                    "Could not infer weight for {}: {}\nFallback weight: {}\n",
                    file.display(),
                    error.as_deref().unwrap_or("unknown error"),
                    output.weight
                ),
            }),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Apply { .. } => "apply",
        Commands::Weight { .. } => "weight",
        Commands::Status { .. } => "status",
        Commands::Config => "config",
    }
}
