//! CLI сервиса анализа тональности
//!
//! Использование:
//! ```bash
//! cargo run -- serve --port 8080
//! cargo run -- analyze --text "Всё отлично!" --explain
//! cargo run -- batch --file reviews.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use text_sentiment::{
    api::{self, SentimentService},
    config::{load_config, AppConfig},
    logging::setup_logging,
    split_lines, strip_text, SentimentScorer,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "sentiment_api")]
#[command(version)]
#[command(about = "Lexicon-based sentiment analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Файл конфигурации (.toml или .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Запустить HTTP-сервис
    Serve {
        /// Адрес для прослушивания
        #[arg(long)]
        host: Option<String>,

        /// Порт
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Проанализировать один текст
    Analyze {
        /// Текст для анализа
        #[arg(short, long)]
        text: String,

        /// Показать найденные маркеры
        #[arg(short, long)]
        explain: bool,
    },

    /// Проанализировать файл построчно
    Batch {
        /// Путь к текстовому файлу
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    config.apply_env()?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    setup_logging(&config.logging.level, config.logging.ansi)?;

    let scorer = SentimentScorer::new();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            api::serve(SentimentService::new(scorer), &config.server).await?;
        }
        Commands::Analyze { text, explain } => {
            if strip_text(&text).is_empty() {
                anyhow::bail!(text_sentiment::messages::EMPTY_TEXT);
            }

            let (result, breakdown) = scorer.explain(&text);
            if explain {
                let output = serde_json::json!({
                    "sentiment": result.sentiment,
                    "confidence": result.confidence,
                    "markers": breakdown,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
        }
        Commands::Batch { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let lines = split_lines(&content);
            info!(lines = lines.len(), "analyzing file");

            let report = scorer.score_lines(&lines);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
