//! Error types for the scour-search crate.
//!
//! Adapter errors never reach callers of [`crate::SearchAdapter::search`];
//! they are logged and turned into an empty result set. The variants are
//! kept distinct so the logs say *why* a source came back empty.

/// Errors that can occur while fetching or extracting search results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The remote source could not be reached or answered with a non-2xx status.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// The page parsed, but no fragment matched the source's result selector.
    #[error("no results extracted: {0}")]
    ExtractionEmpty(String),

    /// A selector or URL could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for scour-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_source_unavailable() {
        let err = SearchError::SourceUnavailable("Bing HTTP error: 503".into());
        assert_eq!(err.to_string(), "source unavailable: Bing HTTP error: 503");
    }

    #[test]
    fn display_extraction_empty() {
        let err = SearchError::ExtractionEmpty("arXiv".into());
        assert_eq!(err.to_string(), "no results extracted: arXiv");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("invalid fragment selector".into());
        assert_eq!(err.to_string(), "parse error: invalid fragment selector");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
