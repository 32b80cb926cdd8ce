//! Core text quality evaluation for artgen
//!
//! This crate holds the quality-assessment pipeline that decides whether a
//! generated article is acceptable: structural statistics, readability
//! scoring, keyword extraction and overuse detection, merged by the
//! [`QualityChecker`] into a single pass/fail verdict with a structured
//! report. It has no I/O; the generation client lives in `artgen-lmstudio`.

pub mod analysis;
pub mod error;
pub mod locale;
pub mod report;
pub mod types;

pub use analysis::QualityChecker;
pub use error::{Error, Result};
pub use locale::{LocaleProfile, LocaleTable};
pub use types::{
    AnalysisReport, GenerationRequest, GenerationSettings, Keyword, QualityThresholds, RetryConfig,
};
