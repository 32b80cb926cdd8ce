//! LM Studio endpoint configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use artgen_core::types::GenerationSettings;

use crate::client::EndpointKind;

/// Configuration for the LM Studio HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LmStudioConfig {
    pub url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Time budget per attempt, not cumulative across retries.
    pub timeout_secs: u64,
    pub endpoint: EndpointKind,
}

impl Default for LmStudioConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:1234/v1/chat/completions".to_string(),
            model: "gemma-3-4b-it-qat".to_string(),
            max_tokens: 2500,
            temperature: 0.7,
            timeout_secs: 60,
            endpoint: EndpointKind::ChatCompletions,
        }
    }
}

impl LmStudioConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `LM_STUDIO_*` environment variables where set.
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();

        if let Ok(url) = env::var("LM_STUDIO_URL") {
            self.url = url;
        }
        if let Ok(model) = env::var("LM_STUDIO_MODEL") {
            self.model = model;
        }
        if let Some(max_tokens) = parse_env("LM_STUDIO_MAX_TOKENS") {
            self.max_tokens = max_tokens;
        }
        if let Some(temperature) = parse_env("LM_STUDIO_TEMPERATURE") {
            self.temperature = temperature;
        }
        if let Some(timeout_secs) = parse_env("LM_STUDIO_TIMEOUT") {
            self.timeout_secs = timeout_secs;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Model parameters for building per-call generation requests.
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            model_id: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
