use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input directory does not exist: {path:?}")]
    MissingInputDir { path: PathBuf },

    #[error("Input file does not exist: {path:?}")]
    MissingInputFile { path: PathBuf },

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: devtype::Error,
    },

    #[error("{errors} item(s) failed")]
    Failures { errors: usize },
}
