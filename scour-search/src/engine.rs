//! The search capability and its rule-driven implementation.
//!
//! Every source is searched through [`SearchAdapter`]. The production
//! implementation, [`EngineAdapter`], pairs an [`ExtractionRule`] with a
//! [`Fetcher`] and never fails: transport and extraction problems are
//! logged and surface to the caller only as an empty result set.

use std::future::Future;
use std::sync::Arc;

use crate::config::SearchConfig;
use crate::engines::rule_for;
use crate::error::SearchError;
use crate::extract::{extract, ExtractionRule};
use crate::http::{self, Fetcher};
use crate::types::{Engine, SearchResult};

/// A source that can be searched.
///
/// Implementations return the complete result list for one query and
/// must contain their own failures.
pub trait SearchAdapter: Send + Sync {
    /// Search this source. An unavailable source yields an empty list.
    fn search(&self, query: &str) -> impl Future<Output = Vec<SearchResult>> + Send;

    /// Returns which [`Engine`] this adapter represents.
    fn engine(&self) -> Engine;
}

/// [`SearchAdapter`] driven by a declarative [`ExtractionRule`].
pub struct EngineAdapter<F> {
    rule: &'static ExtractionRule,
    fetcher: Arc<F>,
    user_agent: String,
}

impl<F: Fetcher> EngineAdapter<F> {
    /// Create the adapter for `engine`, sharing `fetcher` with other adapters.
    pub fn new(engine: Engine, fetcher: Arc<F>, config: &SearchConfig) -> Self {
        Self::with_rule(rule_for(engine), fetcher, config)
    }

    /// Create an adapter for an arbitrary rule.
    pub fn with_rule(rule: &'static ExtractionRule, fetcher: Arc<F>, config: &SearchConfig) -> Self {
        Self {
            rule,
            fetcher,
            user_agent: http::user_agent(config),
        }
    }

    /// The rule this adapter applies.
    pub fn rule(&self) -> &'static ExtractionRule {
        self.rule
    }

    /// Fetch and extract, reporting failures instead of containing them.
    ///
    /// # Errors
    ///
    /// [`SearchError::SourceUnavailable`] from the fetch,
    /// [`SearchError::ExtractionEmpty`] or [`SearchError::Parse`] from extraction.
    pub async fn try_search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let engine = self.rule.engine;
        tracing::trace!(query, %engine, "searching");

        let url = self.rule.request_url(query);
        let headers = [
            ("User-Agent", self.user_agent.as_str()),
            ("Accept", "text/html,application/xhtml+xml"),
            ("Accept-Language", "en-US,en;q=0.9"),
        ];

        let html = self
            .fetcher
            .fetch(&url, &headers)
            .await
            .map_err(|e| match e {
                SearchError::SourceUnavailable(msg) => {
                    SearchError::SourceUnavailable(format!("{engine}: {msg}"))
                }
                other => other,
            })?;

        tracing::trace!(%engine, bytes = html.len(), "results page received");
        extract(&html, self.rule)
    }
}

impl<F: Fetcher> SearchAdapter for EngineAdapter<F> {
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        let engine = self.rule.engine;
        match self.try_search(query).await {
            Ok(results) => {
                tracing::info!(%engine, count = results.len(), "search complete");
                results
            }
            Err(err @ SearchError::ExtractionEmpty(_)) => {
                tracing::info!(%engine, error = %err, "no result fragments on page");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(%engine, error = %err, "search failed");
                Vec::new()
            }
        }
    }

    fn engine(&self) -> Engine {
        self.rule.engine
    }
}
