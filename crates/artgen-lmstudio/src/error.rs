//! Failure taxonomy of the generation boundary.

use std::time::Duration;

use thiserror::Error;

/// Typed outcome of a single failed generation attempt.
///
/// `Network` means the backend is unreachable (refused connection, DNS
/// failure); the retry loop treats it as fatal because further attempts
/// within the same call cannot succeed. The remaining variants are
/// transient and retryable.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("cannot reach the generation backend: {0}")]
    Network(String),

    #[error("unexpected backend response: {0}")]
    Protocol(String),

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend returned an empty completion")]
    EmptyResponse,
}
