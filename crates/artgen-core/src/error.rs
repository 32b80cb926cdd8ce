//! Error types shared across the artgen crates

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by configuration loading and article persistence. The
/// analysis pipeline itself never returns these; it degrades internally and
/// reports through [`crate::AnalysisReport::errors`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
