//! End-to-end article generation: prompt assembly, retried generation and
//! the quality gate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use artgen_core::types::{AnalysisReport, RetryConfig};
use artgen_core::QualityChecker;
use artgen_lmstudio::{GenerationBackend, RetryingGenerator};

use crate::config::AppConfig;
use crate::prompts;
use crate::topics;

/// Everything known about a generated article besides its body.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMetadata {
    pub title: String,
    pub language: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
    pub readability_score: f64,
    pub keywords: Vec<String>,
    pub validation_passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub content: String,
    pub metadata: ArticleMetadata,
}

/// Keywords carried into article metadata.
const METADATA_KEYWORDS: usize = 5;

/// Orchestrates one article from topic to checked content. Articles that
/// fail the quality gate are still returned, flagged through
/// `validation_passed`, so callers can decide whether to keep them.
pub struct ArticleGenerator<B> {
    generator: RetryingGenerator<B>,
    checker: QualityChecker,
}

impl<B: GenerationBackend> ArticleGenerator<B> {
    pub fn new(backend: B, config: &AppConfig) -> Self {
        let retry = RetryConfig {
            max_retries: config.article.max_retries,
            ..RetryConfig::default()
        };
        Self {
            generator: RetryingGenerator::new(backend, config.lm_studio.settings(), retry),
            checker: QualityChecker::new(config.article.thresholds()),
        }
    }

    /// Generate one article. `None` means the backend produced nothing
    /// within the retry budget.
    pub async fn generate_article(
        &self,
        topic: &str,
        language: &str,
        category: Option<&str>,
    ) -> Option<(Article, AnalysisReport)> {
        info!(topic, language, "generating article");

        let system_prompt = prompts::build_system_prompt(language, category);
        let user_prompt = prompts::build_user_prompt(topic, language);

        let content = self
            .generator
            .generate_with_retry(&system_prompt, &user_prompt)
            .await?;

        let (passed, report) = self.checker.check(&content, language);
        if passed {
            info!(topic, "article passed the quality check");
        } else {
            warn!(topic, errors = ?report.errors, "article failed the quality check");
        }

        let metadata = ArticleMetadata {
            title: topic.to_string(),
            language: language.to_string(),
            category: category.map(str::to_string),
            created_at: Utc::now(),
            word_count: report.word_count,
            readability_score: report.readability_score,
            keywords: report
                .keywords
                .iter()
                .take(METADATA_KEYWORDS)
                .map(|k| k.word.clone())
                .collect(),
            validation_passed: passed,
        };

        Some((
            Article {
                content,
                metadata,
            },
            report,
        ))
    }

    /// Generate one random topic in both languages, pairing the Ukrainian
    /// topic with its Russian counterpart.
    pub async fn generate_daily(&self) -> Vec<(Article, AnalysisReport)> {
        let Some((ua_topic, ua_category)) = topics::pick_random("ua") else {
            return Vec::new();
        };
        let Some(ru_topic) = topics::translate_topic(ua_topic) else {
            error!(topic = ua_topic, "no Russian counterpart for topic");
            return Vec::new();
        };
        let ru_category = topics::translate_category(ua_category);
        info!(ua_topic, ru_topic, "daily topic selected");

        let mut articles = Vec::new();
        for (language, topic, category) in [
            ("ua", ua_topic, ua_category),
            ("ru", ru_topic, ru_category),
        ] {
            match self.generate_article(topic, language, Some(category)).await {
                Some(result) => articles.push(result),
                None => error!(language, topic, "article generation produced nothing"),
            }
        }
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use artgen_core::types::GenerationRequest;
    use artgen_lmstudio::GenerationError;

    struct CannedBackend(&'static str);

    #[async_trait]
    impl GenerationBackend for CannedBackend {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    struct DeadBackend;

    #[async_trait]
    impl GenerationBackend for DeadBackend {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
            Err(GenerationError::Network("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn failing_article_is_returned_with_flag() {
        let generator = ArticleGenerator::new(
            CannedBackend("Короткий текст без структуры."),
            &AppConfig::default(),
        );
        let (article, report) = generator
            .generate_article("Выбор прицела", "ru", None)
            .await
            .expect("content was generated");

        assert!(!article.metadata.validation_passed);
        assert!(!report.passed);
        assert_eq!(article.metadata.title, "Выбор прицела");
        assert_eq!(article.metadata.language, "ru");
    }

    #[tokio::test]
    async fn dead_backend_yields_nothing() {
        let generator = ArticleGenerator::new(DeadBackend, &AppConfig::default());
        assert!(generator
            .generate_article("Выбор прицела", "ru", None)
            .await
            .is_none());
    }
}
