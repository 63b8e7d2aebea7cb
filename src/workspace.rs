//! Workspace domain: command orchestration, batch apply, status assembly, and formatting.

mod apply;
mod commands;
mod facade;
mod format;
mod status;
mod types;

pub use facade::*;
