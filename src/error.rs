//! Error types for primer
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for primer operations
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Main error type for primer operations
#[derive(Error, Debug)]
pub enum PrimerError {
    /// The journal file (or another required file) does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Standard input ended before every question was answered
    #[error("input closed before answering '{prompt}'")]
    InputClosed { prompt: String },
}

impl From<dialoguer::Error> for PrimerError {
    fn from(err: dialoguer::Error) -> Self {
        PrimerError::Prompt(err.to_string())
    }
}
