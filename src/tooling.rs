//! Tooling & Integration Layer
//!
//! Command-line entry points over the workspace commands.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
