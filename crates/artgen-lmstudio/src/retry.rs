//! Bounded-retry orchestration around a generation backend.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use artgen_core::types::{GenerationRequest, GenerationSettings, RetryConfig};

use crate::client::GenerationBackend;
use crate::error::GenerationError;

/// Drives a [`GenerationBackend`] with strictly sequential attempts and
/// exponential backoff between them.
///
/// The backoff sleep suspends only the calling task, so a server hosting
/// many generations keeps serving other requests during the wait. On an
/// unreachable backend the loop aborts immediately; after the budget is
/// exhausted the caller gets `None`, never an error.
pub struct RetryingGenerator<B> {
    backend: B,
    settings: GenerationSettings,
    retry: RetryConfig,
}

impl<B: GenerationBackend> RetryingGenerator<B> {
    pub fn new(backend: B, settings: GenerationSettings, retry: RetryConfig) -> Self {
        Self {
            backend,
            settings,
            retry,
        }
    }

    /// Obtain generated text, or `None` once the retry budget is exhausted
    /// or the backend proved unreachable. Callers branch on presence.
    pub async fn generate_with_retry(&self, system_prompt: &str, user_prompt: &str) -> Option<String> {
        for attempt in 0..self.retry.max_retries {
            debug!(
                attempt = attempt + 1,
                max = self.retry.max_retries,
                "generation attempt"
            );
            let request = GenerationRequest::new(system_prompt, user_prompt, &self.settings);
            match self.backend.generate(&request).await {
                Ok(text) => {
                    info!(attempt = attempt + 1, "text generated");
                    return Some(text);
                }
                Err(GenerationError::Network(reason)) => {
                    // Backend down; further attempts in this call are wasted.
                    error!(%reason, "generation backend unreachable, aborting");
                    return None;
                }
                Err(failure) => {
                    warn!(%failure, attempt = attempt + 1, "generation attempt failed");
                }
            }

            if attempt + 1 < self.retry.max_retries {
                let delay = backoff_delay(self.retry.base_delay, attempt);
                info!(?delay, "waiting before next attempt");
                tokio::time::sleep(delay).await;
            }
        }

        error!(
            retries = self.retry.max_retries,
            "generation failed after all retries"
        );
        None
    }
}

/// `base * 2^attempt`, attempt counted from zero.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 0), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(4));
    }

    #[test]
    fn backoff_saturates_instead_of_overflowing() {
        let base = Duration::from_secs(1);
        let delay = backoff_delay(base, u32::MAX);
        assert!(delay >= backoff_delay(base, 10));
    }
}
