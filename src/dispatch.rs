//! Routing a user's engine selection to the search core.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use scour_search::{Engine, SearchConfig, SearchResult};

/// Which sources a search should query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    /// A single source.
    One(Engine),
    /// Every source, one after another.
    All,
}

impl EngineChoice {
    /// Parse a form value. Unknown values give `None`.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for EngineChoice {
    type Err = scour_search::SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse::<Engine>().map(Self::One)
        }
    }
}

impl fmt::Display for EngineChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(engine) => f.write_str(engine.key()),
            Self::All => f.write_str("all"),
        }
    }
}

/// The search operations the front-end needs.
///
/// Implementations are fail-soft: a search that finds nothing and a
/// search whose sources were all unreachable look the same.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Run a search and return merged results.
    async fn search(&self, choice: EngineChoice, query: &str) -> Vec<SearchResult>;

    /// Summarise the page at `url`.
    async fn summarize(&self, url: &str, sentences: usize) -> Option<String>;
}

/// [`Searcher`] that goes out to the real sources.
#[derive(Debug, Clone)]
pub struct LiveSearcher {
    config: SearchConfig,
}

impl LiveSearcher {
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: SearchConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

#[async_trait]
impl Searcher for LiveSearcher {
    async fn search(&self, choice: EngineChoice, query: &str) -> Vec<SearchResult> {
        let outcome = match choice {
            EngineChoice::One(engine) => scour_search::search(engine, query, &self.config).await,
            EngineChoice::All => scour_search::search_all(query, &self.config).await,
        };
        outcome.unwrap_or_else(|err| {
            tracing::warn!(%choice, error = %err, "search could not start");
            Vec::new()
        })
    }

    async fn summarize(&self, url: &str, sentences: usize) -> Option<String> {
        scour_search::summarize_article(url, sentences, &self.config)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(url, error = %err, "summary could not start");
                None
            })
    }
}

/// Run `choice` through `searcher`; an unrecognised engine value gives no results.
pub async fn perform_search(
    searcher: &dyn Searcher,
    engine: &str,
    query: &str,
) -> Vec<SearchResult> {
    match EngineChoice::parse(engine) {
        Some(choice) => searcher.search(choice, query).await,
        None => {
            tracing::debug!(engine, "unknown engine selected");
            Vec::new()
        }
    }
}
