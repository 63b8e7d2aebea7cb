//! Integration tests for weight inference and front matter application

mod apply_batch;
mod cli_contracts;
mod cli_parse;
mod config_layers;
mod support;
mod weight_inference;
