//! Article generation pipeline for artgen
//!
//! Glue between the quality core and the LM Studio client: application
//! configuration, the topic catalog, prompt assembly, the generation
//! orchestrator and multi-format persistence.

mod config;
mod generator;
mod storage;
mod ui;

pub mod prompts;
pub mod topics;

pub use config::{AppConfig, ArticleSettings, OutputConfig, OutputFormat};
pub use generator::{Article, ArticleGenerator, ArticleMetadata};
pub use storage::save_article;
pub use ui::print_report;

// Re-export core types callers commonly touch
pub use artgen_core::error::{Error, Result};
