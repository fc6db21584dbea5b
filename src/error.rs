//! Application error type.
//!
//! Every variant maps to a process exit code so `main` can stay a thin wrapper:
//! - `2`: inputs or configuration
//! - `3`: data that cannot be turned into a figure
//! - `4`: output (writing or displaying the figure)

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Missing required input file(s): {}", join_paths(.paths))]
    MissingInput { paths: Vec<PathBuf> },

    #[error("Failed to load '{}': {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(
        "Could not resolve column `{semantic}`: no header contains any of {candidates:?} (headers: {headers:?})"
    )]
    SchemaResolution {
        semantic: String,
        candidates: Vec<String>,
        headers: Vec<String>,
    },

    #[error("Column `{column}` line {line}: expected a number, found '{value}'")]
    NonNumeric {
        column: String,
        line: usize,
        value: String,
    },

    #[error("Invalid curve parameters: {0}")]
    InvalidCurve(String),

    #[error("Cannot compose figure: {0}")]
    Compose(String),

    #[error("Failed to write figure '{}': {message}", .path.display())]
    Export { path: PathBuf, message: String },

    #[error("Terminal preview failed: {0}")]
    Display(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingInput { .. } | AppError::Load { .. } | AppError::Config(_) => 2,
            AppError::SchemaResolution { .. }
            | AppError::NonNumeric { .. }
            | AppError::InvalidCurve(_)
            | AppError::Compose(_) => 3,
            AppError::Export { .. } | AppError::Display(_) => 4,
        }
    }

    pub(crate) fn load(path: &Path, message: impl Into<String>) -> Self {
        AppError::Load {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn export(path: &Path, message: impl Into<String>) -> Self {
        AppError::Export {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    let parts: Vec<String> = paths.iter().map(|p| format!("'{}'", p.display())).collect();
    parts.join(", ")
}
