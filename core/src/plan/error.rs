//! Error types for plan operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors during plan loading and lookup
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read plans directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan '{id}': {reason}")]
    InvalidPlan { id: String, reason: String },

    #[error("workout '{id}' not found")]
    NotFound { id: String },
}
