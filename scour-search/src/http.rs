//! Page fetching for search sources and article pages.
//!
//! [`Fetcher`] is the transport capability the adapters and the
//! summarizer depend on. [`HttpFetcher`] implements it with a shared
//! [`reqwest::Client`]; tests substitute their own implementations.

use std::future::Future;

use rand::seq::SliceRandom;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Realistic desktop browser User-Agent strings.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Fetch a URL and return the response body as text.
///
/// One attempt per call: no retry, no backoff, no caching.
pub trait Fetcher: Send + Sync {
    /// GET `url` with the given extra request headers.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SourceUnavailable`] on connection failure,
    /// timeout, a non-2xx status, or an unreadable body.
    fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, SearchError>> + Send;
}

/// [`Fetcher`] backed by a configured [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, SearchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::SourceUnavailable(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::SourceUnavailable(format!("HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::SourceUnavailable(format!("response read failed: {e}")))?;

        tracing::trace!(url, bytes = body.len(), "response received");
        Ok(body)
    }
}

/// Build a [`reqwest::Client`] configured for scraping.
///
/// The client has:
/// - Cookie store enabled (for consent pages)
/// - Timeout from config
/// - Brotli and gzip decompression
/// - At most 10 redirects
///
/// The User-Agent is sent per request by the caller, not set here.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(config.timeout())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}

/// The User-Agent to send: the configured one, or a random browser UA.
pub fn user_agent(config: &SearchConfig) -> String {
    match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    }
}

/// Select a random User-Agent string from the built-in list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const array
        .unwrap_or(USER_AGENTS[0])
}
