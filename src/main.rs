use std::path::PathBuf;
#[cfg(feature = "web")]
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newscloud::article::fetcher::ArticleFetcher;
use newscloud::config::Config;
use newscloud::output::terminal::display_word_cloud;
use newscloud::pipeline::Pipeline;
use newscloud::text::normalizer::TextNormalizer;
use newscloud::topics::analyzer::{Method, TopicAnalyzer};

/// newscloud: keyword and topic word clouds for news articles.
///
/// Fetches an article, cleans its text and ranks its most important terms
/// with TF-IDF or an LDA topic model.
#[derive(Parser)]
#[command(name = "newscloud", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a news article and print its word cloud
    Analyze {
        /// Article URL
        url: String,

        /// Scoring method: tfidf (default), topic or lda
        #[arg(long)]
        method: Option<String>,
    },

    /// Print the word cloud of a local text file (no network)
    Text {
        /// Path to a plain-text file
        path: PathBuf,

        /// Scoring method: tfidf (default), topic or lda
        #[arg(long)]
        method: Option<String>,
    },

    /// Run the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT env var, then 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: NEWSCLOUD_BIND env var, then 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newscloud=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { url, method } => {
            let method = Method::from_selector(method.as_deref());
            let pipeline = build_pipeline(&config)?;
            let fetcher = ArticleFetcher::new(&config.user_agent, config.fetch_timeout)?;

            println!("{}", format!("Fetching {url}...").dimmed());
            let article = fetcher.fetch_article(&url).await?;
            println!("Analyzing '{}' ({} characters)...", article.title, article.text.chars().count());

            let terms = pipeline.analyze_text(&article.text, method)?;
            display_word_cloud(&article.title, method, &terms);
        }

        Commands::Text { path, method } => {
            let method = Method::from_selector(method.as_deref());
            let pipeline = build_pipeline(&config)?;

            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let terms = pipeline.analyze_text(&text, method)?;

            let title = path.display().to_string();
            display_word_cloud(&title, method, &terms);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());

            let state = newscloud::web::AppState {
                pipeline: Arc::new(build_pipeline(&config)?),
                fetcher: Arc::new(ArticleFetcher::new(&config.user_agent, config.fetch_timeout)?),
            };

            println!("{}", format!("Serving on http://{bind}:{port}").bold());
            newscloud::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

fn build_pipeline(config: &Config) -> Result<Pipeline> {
    info!(
        max_features = config.analyzer.max_features,
        topics = config.analyzer.n_topics,
        top_n = config.analyzer.top_n,
        min_tokens = config.min_tokens,
        "Initializing analysis pipeline"
    );
    Ok(Pipeline::new(
        TextNormalizer::new()?,
        TopicAnalyzer::new(config.analyzer.clone()),
        config.min_tokens,
    ))
}
