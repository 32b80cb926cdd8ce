//! Multi-format article persistence.

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use artgen_core::error::{Error, Result};

use crate::config::{OutputConfig, OutputFormat};
use crate::generator::{Article, ArticleMetadata};

static NON_FILENAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Longest slug kept from the article title.
const MAX_TITLE_CHARS: usize = 50;

/// Write one article in every configured format. Returns the written paths.
pub fn save_article(article: &Article, output: &OutputConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&output.articles_dir)?;
    let base = base_filename(&article.metadata);

    let mut saved = Vec::new();
    for format in &output.formats {
        let path = match format {
            OutputFormat::Txt => {
                let path = output.articles_dir.join(format!("{base}.txt"));
                fs::write(&path, render_txt(article)?)?;
                path
            }
            OutputFormat::Markdown => {
                let path = output.articles_dir.join(format!("{base}.md"));
                fs::write(&path, render_markdown(article))?;
                path
            }
        };
        info!(path = %path.display(), "article saved");
        saved.push(path);
    }
    Ok(saved)
}

/// `YYYYmmdd_HHMMSS_<lang>_<slug>` with the title reduced to word
/// characters and underscores.
fn base_filename(metadata: &ArticleMetadata) -> String {
    let timestamp = metadata.created_at.format("%Y%m%d_%H%M%S");
    let stripped = NON_FILENAME_RE.replace_all(&metadata.title, "");
    let slug: String = SEPARATOR_RE
        .replace_all(stripped.trim(), "_")
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();
    format!("{timestamp}_{}_{slug}", metadata.language)
}

/// Plain text: a metadata block followed by the body.
fn render_txt(article: &Article) -> Result<String> {
    let metadata = serde_json::to_string_pretty(&article.metadata)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    let bar = "=".repeat(60);
    Ok(format!(
        "{bar}\nMETADATA\n{bar}\n{metadata}\n\n{bar}\nARTICLE\n{bar}\n{}",
        article.content
    ))
}

/// Markdown with a YAML front matter block.
fn render_markdown(article: &Article) -> String {
    let metadata = &article.metadata;
    format!(
        "---\n\
         title: {}\n\
         language: {}\n\
         category: {}\n\
         created_at: {}\n\
         word_count: {}\n\
         readability_score: {:.2}\n\
         keywords: {}\n\
         ---\n\n{}",
        metadata.title,
        metadata.language,
        metadata.category.as_deref().unwrap_or(""),
        metadata.created_at.to_rfc3339(),
        metadata.word_count,
        metadata.readability_score,
        metadata.keywords.join(", "),
        article.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            content: "## Раздел\n\nТекст статьи.".to_string(),
            metadata: ArticleMetadata {
                title: "Выбор тактического жилета: советы!".to_string(),
                language: "ru".to_string(),
                category: Some("снаряжение".to_string()),
                created_at: Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap(),
                word_count: 4,
                readability_score: 6.4,
                keywords: vec!["жилет".to_string(), "снаряжение".to_string()],
                validation_passed: true,
            },
        }
    }

    #[test]
    fn filename_is_sanitized_and_timestamped() {
        let article = sample_article();
        let base = base_filename(&article.metadata);
        assert!(base.starts_with("20240517_123045_ru_"));
        assert!(!base.contains(':'));
        assert!(!base.contains('!'));
        assert!(!base.contains(' '));
    }

    #[test]
    fn saves_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            articles_dir: dir.path().join("articles"),
            formats: vec![OutputFormat::Txt, OutputFormat::Markdown],
        };

        let paths = save_article(&sample_article(), &output).unwrap();

        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert!(path.exists());
        }
        let markdown = fs::read_to_string(&paths[1]).unwrap();
        assert!(markdown.starts_with("---\n"));
        assert!(markdown.contains("title: Выбор тактического жилета: советы!"));
        assert!(markdown.contains("keywords: жилет, снаряжение"));
        assert!(markdown.contains("Текст статьи."));
    }

    #[test]
    fn txt_format_embeds_metadata_block() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            articles_dir: dir.path().to_path_buf(),
            formats: vec![OutputFormat::Txt],
        };

        let paths = save_article(&sample_article(), &output).unwrap();
        let text = fs::read_to_string(&paths[0]).unwrap();
        assert!(text.contains("METADATA"));
        assert!(text.contains("\"validation_passed\": true"));
        assert!(text.contains("Текст статьи."));
    }
}
