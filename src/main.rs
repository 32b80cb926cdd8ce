use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use artgen_cli::{print_report, save_article, AppConfig, ArticleGenerator};
use artgen_cli::topics;
use artgen_core::{report, QualityChecker};
use artgen_lmstudio::LmStudioClient;

#[derive(Parser)]
#[command(name = "artgen")]
#[command(about = "Topical article generator backed by a local LM Studio server", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a single article and save it
    Generate {
        /// Article topic
        topic: String,
        /// Language code (ru, ua)
        #[arg(short, long, default_value = "ru")]
        language: String,
        /// Topic category used to focus the prompt
        #[arg(short = 'k', long)]
        category: Option<String>,
    },
    /// Generate one random topic in both languages
    Daily,
    /// List the topic catalog
    Topics {
        /// Language code (ru, ua)
        #[arg(short, long, default_value = "ru")]
        language: String,
    },
    /// Run the quality check against an existing file
    Check {
        file: PathBuf,
        /// Language code (ru, ua)
        #[arg(short, long, default_value = "ru")]
        language: String,
        /// Also write an HTML report next to the input file
        #[arg(long)]
        html: bool,
    },
    /// Test connectivity to the generation backend
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config);

    match cli.command {
        Command::Generate {
            topic,
            language,
            category,
        } => {
            let client = LmStudioClient::new(config.lm_studio.clone())?;
            let generator = ArticleGenerator::new(client, &config);

            match generator
                .generate_article(&topic, &language, category.as_deref())
                .await
            {
                Some((article, quality)) => {
                    print_report(&quality);
                    for path in save_article(&article, &config.output)? {
                        println!("{} {}", "saved".green(), path.display());
                    }
                }
                None => {
                    println!("{}", "generation produced no article".red());
                    std::process::exit(1);
                }
            }
        }
        Command::Daily => {
            let client = LmStudioClient::new(config.lm_studio.clone())?;
            let generator = ArticleGenerator::new(client, &config);

            let articles = generator.generate_daily().await;
            if articles.is_empty() {
                println!("{}", "no articles generated".red());
                std::process::exit(1);
            }
            for (article, quality) in &articles {
                println!(
                    "{} {} [{}]",
                    "generated".green().bold(),
                    article.metadata.title,
                    article.metadata.language
                );
                print_report(quality);
                for path in save_article(article, &config.output)? {
                    println!("{} {}", "saved".green(), path.display());
                }
            }
        }
        Command::Topics { language } => {
            for group in topics::categories(&language) {
                println!("{}", group.category.bold());
                for topic in group.topics {
                    println!("  {topic}");
                }
            }
        }
        Command::Check {
            file,
            language,
            html,
        } => {
            let content = fs::read_to_string(&file)?;
            let checker = QualityChecker::new(config.article.thresholds());
            let (passed, quality) = checker.check(&content, &language);
            print_report(&quality);

            if html {
                let path = file.with_extension("report.html");
                fs::write(&path, report::render_html(&quality))?;
                println!("{} {}", "report".green(), path.display());
            }
            if !passed {
                std::process::exit(1);
            }
        }
        Command::Ping => {
            let client = LmStudioClient::new(config.lm_studio.clone())?;
            if client.test_connection().await {
                println!("{} {}", "✓".green(), "generation backend reachable");
            } else {
                println!("{} {}", "✗".red(), "generation backend unreachable");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
