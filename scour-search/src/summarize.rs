//! Extractive article summaries.
//!
//! A summary is the first few ". "-separated pieces of a page's paragraph
//! text. The split is a plain substring split, so abbreviations and
//! decimals cut sentences short; callers depend on that exact output.

use std::sync::Arc;

use scraper::{Html, Selector};

use crate::config::SearchConfig;
use crate::http::{self, Fetcher};

/// Number of sentences in a summary when none is given.
pub const DEFAULT_SENTENCES: usize = 3;

const SENTENCE_DELIMITER: &str = ". ";

/// Fetches pages and summarises their paragraph text.
pub struct ArticleSummarizer<F> {
    fetcher: Arc<F>,
    user_agent: String,
}

impl<F: Fetcher> ArticleSummarizer<F> {
    /// Create a summarizer that fetches through `fetcher` with the
    /// User-Agent chosen from `config`.
    pub fn new(fetcher: Arc<F>, config: &SearchConfig) -> Self {
        Self {
            fetcher,
            user_agent: http::user_agent(config),
        }
    }

    /// Summarise the page at `url` in at most `sentences` pieces.
    ///
    /// Returns `None` if the page cannot be fetched or has no paragraph text.
    pub async fn summarize(&self, url: &str, sentences: usize) -> Option<String> {
        tracing::trace!(url, sentences, "summarising article");

        let html = match self
            .fetcher
            .fetch(url, &[("User-Agent", self.user_agent.as_str())])
            .await
        {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(url, error = %err, "summarization fetch failed");
                return None;
            }
        };

        let summary = summarize_html(&html, sentences);
        if summary.is_none() {
            tracing::info!(url, "no paragraph content to summarise");
        }
        summary
    }
}

/// Summarise an already-fetched page.
///
/// The text of every `<p>` is joined with single spaces in document
/// order, split on `". "`, and the first `sentences` pieces are joined
/// back with `". "`. Returns `None` when the joined text is empty.
pub fn summarize_html(html: &str, sentences: usize) -> Option<String> {
    let document = Html::parse_document(html);
    let paragraph_sel = Selector::parse("p").ok()?;

    let text = document
        .select(&paragraph_sel)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return None;
    }

    Some(
        text.split(SENTENCE_DELIMITER)
            .take(sentences)
            .collect::<Vec<_>>()
            .join(SENTENCE_DELIMITER),
    )
}
