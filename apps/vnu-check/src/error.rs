//! Error type shared by the command builder, runner, parser and validator.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a validation call could not produce a result.
///
/// An `Err` always means validity is unknown; a valid document is an `Ok`
/// report with no violations.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("v.Nu binary not found at {}", .path.display())]
    BinaryResolution { path: PathBuf },

    #[error("cannot locate v.Nu install root {}: {source}", .path.display())]
    InstallRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("v.Nu process failed ({command}): {detail}")]
    ProcessExecution { command: String, detail: String },

    #[error("failed to spawn v.Nu ({command}): {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid v.Nu output: {0}")]
    OutputParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
