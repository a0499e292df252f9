//! CLI binary for scour.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use scour::{AppConfig, LiveSearcher, Searcher, perform_search};
use scour_search::{DEFAULT_SENTENCES, SearchResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scour: search general web and academic indexes together.
#[derive(Parser)]
#[command(name = "scour", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Serve the web front-end.
    Serve,

    /// Run one search and print the merged results.
    Search {
        /// Free-text query.
        query: String,

        /// Source key (google, bing, duckduckgo, pubmed, scholar, arxiv) or `all`.
        #[arg(short, long, default_value = "all")]
        engine: String,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarise an article.
    Summarize {
        /// Article URL.
        url: String,

        /// Number of sentences to keep.
        #[arg(short, long, default_value_t = DEFAULT_SENTENCES)]
        sentences: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scour=info,scour_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => {
            let path = AppConfig::default_config_path();
            if path.exists() {
                AppConfig::from_file(&path)?
            } else {
                AppConfig::default()
            }
        }
    };
    config.validate()?;

    let searcher = LiveSearcher::new(config.search.clone())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("scour v{}", env!("CARGO_PKG_VERSION"));
            scour::serve(&config, Arc::new(searcher)).await?;
        }
        Command::Search {
            query,
            engine,
            json,
        } => {
            let results = perform_search(&searcher, &engine, &query).await;
            print_results(&results, json)?;
        }
        Command::Summarize { url, sentences } => {
            match searcher.summarize(&url, sentences).await {
                Some(summary) => println!("{summary}"),
                None => println!("(no summary available)"),
            }
        }
    }
    Ok(())
}

fn print_results(results: &[SearchResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, result) in results.iter().enumerate() {
        println!("{:>3}. [{}] {}", i + 1, result.content_type, result.title);
        println!("     {} ({})", result.link, result.source);
    }
    Ok(())
}
