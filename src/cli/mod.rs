//! CLI support for aql-builder
//!
//! Provides programmatic access to the `aqb` commands so they can be
//! embedded in other tools.

mod render;

pub use render::{Request, execute, keywords_listing, parse_input};

use std::io;

use thiserror::Error as ThisError;

/// Errors that can occur during CLI operations
#[derive(Debug, ThisError)]
pub enum CliError {
    /// Node construction failed
    #[error("Invalid query: {0}")]
    Aql(#[from] crate::AqlError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Pass a value or pipe one to stdin.")]
    NoInput,
}
