//! # scour-search
//!
//! Multi-source search scraping for general web and academic indexes.
//!
//! This crate fetches result pages from Google, Bing, DuckDuckGo, PubMed,
//! Google Scholar and arXiv, extracts titles, links and sources from their
//! HTML, and merges the combined results.
//!
//! ## Design
//!
//! - Each source is a declarative [`extract::ExtractionRule`]; one generic
//!   adapter applies any rule
//! - Sources fail soft: an unreachable or changed site yields no results
//!   and a log line, never an error
//! - Full searches query sources one at a time with a fixed pause between
//!   them, then dedupe by link and sort by source
//! - Best effort only: one request per source, no retry, no caching

pub mod classify;
pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod http;
pub mod orchestrator;
pub mod summarize;
pub mod types;

use std::sync::Arc;

pub use classify::classify;
pub use config::SearchConfig;
pub use engine::{EngineAdapter, SearchAdapter};
pub use error::{Result, SearchError};
pub use http::{Fetcher, HttpFetcher};
pub use orchestrator::delay::{DelayPolicy, FixedDelay, NoDelay};
pub use orchestrator::merge::merge;
pub use orchestrator::search::{default_adapters, run_all};
pub use summarize::{ArticleSummarizer, DEFAULT_SENTENCES};
pub use types::{ContentType, Engine, SearchResult};

/// Search a single source.
///
/// The results are deduplicated by link and sorted by source, as a
/// full search would be.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Source failures
/// are not errors; they produce an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> scour_search::Result<()> {
/// let config = scour_search::SearchConfig::default();
/// let results = scour_search::search(scour_search::Engine::Arxiv, "graph neural networks", &config).await?;
/// for result in &results {
///     println!("[{}] {}: {}", result.source, result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(engine: Engine, query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    let adapter = EngineAdapter::new(engine, fetcher, config);
    Ok(merge(vec![adapter.search(query).await]))
}

/// Search every source in turn, pausing `config.pause_seconds` between them.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> scour_search::Result<()> {
/// let results = scour_search::search_all("crispr off-target", &Default::default()).await?;
/// println!("{} unique results", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_all(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    let adapters = default_adapters(fetcher, config);
    Ok(run_all(&adapters, query, &FixedDelay(config.pause())).await)
}

/// Fetch a page and return the first `sentences` sentences of its paragraphs.
///
/// `Ok(None)` means the page could not be fetched or had no paragraph text.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
pub async fn summarize_article(
    url: &str,
    sentences: usize,
    config: &SearchConfig,
) -> Result<Option<String>> {
    config.validate()?;
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    Ok(ArticleSummarizer::new(fetcher, config)
        .summarize(url, sentences)
        .await)
}
