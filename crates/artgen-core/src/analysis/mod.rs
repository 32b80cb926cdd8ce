//! Quality aggregation: runs every analyzer over one text and merges the
//! results into a pass/fail verdict with a structured report.

pub mod keywords;
pub mod readability;
pub mod structure;

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::locale::{self, LocaleProfile, LocaleTable};
use crate::types::{AnalysisReport, QualityThresholds};

use keywords::WordFrequencies;
use structure::TextStructure;

/// Evaluates generated text against configured thresholds.
///
/// All four analyses always run; a panicking analysis is degraded to
/// zero/empty values and noted in the report instead of propagating. The
/// checker holds no mutable state, so one instance can serve concurrent
/// checks.
pub struct QualityChecker {
    thresholds: QualityThresholds,
    locales: LocaleTable,
}

impl QualityChecker {
    pub fn new(thresholds: QualityThresholds) -> Self {
        Self::with_locales(thresholds, locale::default_locales())
    }

    pub fn with_locales(thresholds: QualityThresholds, locales: LocaleTable) -> Self {
        Self { thresholds, locales }
    }

    fn locale(&self, code: &str) -> &'static LocaleProfile {
        match self.locales.get(code) {
            Some(profile) => profile,
            None => {
                warn!(code, "unrecognized language code, falling back to primary locale");
                locale::primary()
            }
        }
    }

    /// Check one text. Returns the verdict and the full report; never
    /// returns an error and never panics past this boundary.
    pub fn check(&self, content: &str, language: &str) -> (bool, AnalysisReport) {
        let locale = self.locale(language);
        let thresholds = &self.thresholds;
        let mut errors: Vec<String> = Vec::new();

        let structure = recover(|| structure::analyze(content)).unwrap_or_else(|| {
            errors.push("structural analysis failed, counts degraded to zero".to_string());
            TextStructure::default()
        });

        let readability = recover(|| readability::score(content, &structure, locale))
            .unwrap_or_else(|| {
                errors.push("readability scoring failed, score degraded to zero".to_string());
                readability::MIN_SCORE
            });

        let frequencies = recover(|| keywords::frequencies(content, locale)).unwrap_or_else(|| {
            errors.push("keyword extraction failed, keyword set degraded to empty".to_string());
            WordFrequencies::default()
        });

        let overused =
            recover(|| keywords::overused(&frequencies, thresholds.overuse_density_threshold))
                .unwrap_or_else(|| {
                    errors.push("overuse detection failed, overuse set degraded to empty".to_string());
                    Vec::new()
                });

        let ranked = keywords::top(&frequencies, thresholds.max_keywords);

        if structure.word_count < thresholds.min_word_count {
            errors.push(format!(
                "word count {} below minimum {}",
                structure.word_count, thresholds.min_word_count
            ));
        }
        if readability < thresholds.min_readability {
            errors.push(format!(
                "readability {:.2} below minimum {:.2}",
                readability, thresholds.min_readability
            ));
        }
        if structure.heading_count < thresholds.min_headings {
            errors.push(format!(
                "{} headings found, minimum {}",
                structure.heading_count, thresholds.min_headings
            ));
        }
        if structure.paragraph_count < thresholds.min_paragraphs {
            errors.push(format!(
                "{} paragraphs found, minimum {}",
                structure.paragraph_count, thresholds.min_paragraphs
            ));
        }
        if !overused.is_empty() {
            errors.push(format!("overused words: {}", overused.join(", ")));
        }

        let passed = errors.is_empty();
        debug!(
            language = locale.code,
            words = structure.word_count,
            readability,
            passed,
            "quality check finished"
        );

        let report = AnalysisReport {
            word_count: structure.word_count,
            sentence_count: structure.sentence_count,
            paragraph_count: structure.paragraph_count,
            heading_count: structure.heading_count,
            bold_count: structure.bold_count,
            list_item_count: structure.list_item_count,
            avg_sentence_length: structure.avg_sentence_length,
            avg_word_length: structure.avg_word_length,
            readability_score: readability,
            keywords: ranked,
            overused_words: overused,
            errors,
            passed,
        };
        (passed, report)
    }
}

/// Run one analysis, absorbing any panic so the aggregator can degrade that
/// metric instead of unwinding into the caller.
fn recover<T>(analysis: impl FnOnce() -> T) -> Option<T> {
    panic::catch_unwind(AssertUnwindSafe(analysis)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_primary() {
        let checker = QualityChecker::new(QualityThresholds::default());
        let (_, report_unknown) = checker.check("Жилет снова выбран.", "xx");
        let (_, report_ru) = checker.check("Жилет снова выбран.", "ru");
        assert_eq!(report_unknown, report_ru);
    }

    #[test]
    fn verdict_matches_error_list() {
        let checker = QualityChecker::new(QualityThresholds::default());
        let (passed, report) = checker.check("Слишком короткий текст.", "ru");
        assert!(!passed);
        assert!(!report.errors.is_empty());
        assert_eq!(passed, report.passed);
    }
}
