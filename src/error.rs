//! Error types for per-file extraction
//!
//! Project-level operations (walking, config loading) use `anyhow`; anything that
//! can fail for a single file surfaces as an [`ExtractError`] so the scan driver
//! can record it and move on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Failed to set parser language for {language}: {message}")]
    Grammar { language: String, message: String },

    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ExtractResult<T> = Result<T, ExtractError>;
