//! LM Studio integration for artgen
//!
//! [`LmStudioClient`] performs exactly one HTTP attempt per call against a
//! local chat-completions (or plain completions) endpoint and surfaces a
//! typed failure. [`RetryingGenerator`] wraps any [`GenerationBackend`] with
//! bounded retries and exponential backoff, degrading to `None` instead of
//! erroring.

mod client;
mod config;
mod error;
mod retry;


pub use client::{EndpointKind, GenerationBackend, LmStudioClient};
pub use config::LmStudioConfig;
pub use error::GenerationError;
pub use retry::RetryingGenerator;
