//! Application configuration: `config.json` with serde-filled defaults plus
//! environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use artgen_core::types::QualityThresholds;
use artgen_lmstudio::LmStudioConfig;

/// Top-level configuration, mirroring the three sections of the original
/// `config.json`. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lm_studio: LmStudioConfig,
    pub article: ArticleSettings,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSettings {
    pub min_word_count: usize,
    pub min_readability: f64,
    pub min_headings: usize,
    pub min_paragraphs: usize,
    pub overuse_density_threshold: f64,
    pub max_retries: u32,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        let thresholds = QualityThresholds::default();
        Self {
            min_word_count: thresholds.min_word_count,
            min_readability: thresholds.min_readability,
            min_headings: thresholds.min_headings,
            min_paragraphs: thresholds.min_paragraphs,
            overuse_density_threshold: thresholds.overuse_density_threshold,
            max_retries: 3,
        }
    }
}

impl ArticleSettings {
    pub fn thresholds(&self) -> QualityThresholds {
        QualityThresholds {
            min_word_count: self.min_word_count,
            min_readability: self.min_readability,
            min_headings: self.min_headings,
            min_paragraphs: self.min_paragraphs,
            overuse_density_threshold: self.overuse_density_threshold,
            ..QualityThresholds::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub articles_dir: PathBuf,
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("articles"),
            formats: vec![OutputFormat::Txt, OutputFormat::Markdown],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Txt,
    Markdown,
}

impl AppConfig {
    /// Load configuration from `path`. A missing file writes the defaults
    /// out as a template; an unreadable or unparsable file logs a warning
    /// and falls back to defaults. `LM_STUDIO_*` environment variables win
    /// over the file.
    pub fn load(path: &Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(parsed) => {
                        info!(path = %path.display(), "configuration loaded");
                        parsed
                    }
                    Err(e) => {
                        warn!(path = %path.display(), %e, "bad configuration file, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), %e, "cannot read configuration, using defaults");
                    Self::default()
                }
            }
        } else {
            let defaults = Self::default();
            defaults.write_template(path);
            defaults
        };

        config.lm_studio.apply_env();
        config
    }

    fn write_template(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(rendered) => match fs::write(path, rendered) {
                Ok(()) => info!(path = %path.display(), "wrote default configuration"),
                Err(e) => warn!(path = %path.display(), %e, "cannot write default configuration"),
            },
            Err(e) => warn!(%e, "cannot serialize default configuration"),
        }
    }
}
