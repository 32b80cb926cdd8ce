//! Shared data types for the generation and quality pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single generation request. Constructed fresh per attempt and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        settings: &GenerationSettings,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            model_id: settings.model_id.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

/// Model parameters shared by every request issued through one generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model_id: "gemma-3-4b-it-qat".to_string(),
            max_tokens: 2500,
            temperature: 0.7,
        }
    }
}

/// Configuration for retry behavior
///
/// The delay before attempt `n + 1` is `base_delay * 2^n`, so the default
/// produces waits of 1s and 2s between the three attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Thresholds a quality report is evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityThresholds {
    pub min_word_count: usize,
    pub min_readability: f64,
    pub min_headings: usize,
    pub min_paragraphs: usize,
    /// A word is overused when its share of the filtered tokens strictly
    /// exceeds this fraction.
    pub overuse_density_threshold: f64,
    /// How many ranked keywords the report keeps.
    pub max_keywords: usize,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_word_count: 500,
            min_readability: 5.0,
            min_headings: 3,
            min_paragraphs: 5,
            overuse_density_threshold: 0.05,
            max_keywords: 20,
        }
    }
}

/// One ranked keyword: raw frequency plus its share of the filtered tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
    pub density: f64,
}

/// Aggregate result of one quality check.
///
/// Created fresh per check and never mutated after construction. `passed` is
/// true exactly when `errors` is empty; violations are listed in the order
/// length, readability, headings, paragraphs, overuse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
    pub bold_count: usize,
    pub list_item_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    /// 0-10 scale, higher reads easier. See `analysis::readability`.
    pub readability_score: f64,
    /// Most frequent first; ties keep first-occurrence order.
    pub keywords: Vec<Keyword>,
    pub overused_words: Vec<String>,
    pub errors: Vec<String>,
    pub passed: bool,
}
