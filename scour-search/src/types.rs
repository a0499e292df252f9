//! Core types for search results and source identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A single search hit extracted from a source's results page.
///
/// Values are created once per search and never mutated; `link` is the
/// identity used when merging result sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Human-readable title, trimmed.
    pub title: String,
    /// Absolute URL of the hit.
    pub link: String,
    /// Display label: an engine name or the link's domain.
    pub source: String,
    /// Coarse content category derived from the link.
    #[serde(rename = "type")]
    pub content_type: ContentType,
}

/// Content category assigned by [`crate::classify::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "PDF")]
    Pdf,
    Book,
    Video,
    #[serde(rename = "Research Paper")]
    ResearchPaper,
    Article,
}

impl ContentType {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Book => "Book",
            Self::Video => "Video",
            Self::ResearchPaper => "Research Paper",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF" => Ok(Self::Pdf),
            "Book" => Ok(Self::Book),
            "Video" => Ok(Self::Video),
            "Research Paper" => Ok(Self::ResearchPaper),
            "Article" => Ok(Self::Article),
            other => Err(SearchError::Parse(format!("unknown content type: {other}"))),
        }
    }
}

/// Sources that scour-search knows how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Engine {
    /// Google web search.
    Google,
    /// Bing web search.
    Bing,
    /// DuckDuckGo HTML endpoint.
    DuckDuckGo,
    /// PubMed biomedical index.
    PubMed,
    /// Google Scholar academic index.
    GoogleScholar,
    /// arXiv preprint index.
    Arxiv,
}

impl Engine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::DuckDuckGo => "DuckDuckGo",
            Self::PubMed => "PubMed",
            Self::GoogleScholar => "Google Scholar",
            Self::Arxiv => "arXiv",
        }
    }

    /// Returns the short key used in forms and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::DuckDuckGo => "duckduckgo",
            Self::PubMed => "pubmed",
            Self::GoogleScholar => "scholar",
            Self::Arxiv => "arxiv",
        }
    }

    /// Returns all engines in the order they are queried by a full search.
    pub fn all() -> &'static [Engine] {
        &[
            Self::Google,
            Self::Bing,
            Self::DuckDuckGo,
            Self::PubMed,
            Self::GoogleScholar,
            Self::Arxiv,
        ]
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|engine| engine.key() == s)
            .ok_or_else(|| SearchError::Parse(format!("unknown engine: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serialises_type_field() {
        let result = SearchResult {
            title: "Attention Is All You Need".into(),
            link: "https://arxiv.org/abs/1706.03762".into(),
            source: "arXiv".into(),
            content_type: ContentType::ResearchPaper,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["type"], "Research Paper");
        assert_eq!(json["source"], "arXiv");
        assert!(json.get("content_type").is_none());
    }

    #[test]
    fn search_result_deserialises_from_display_labels() {
        let json = r#"{"title":"T","link":"https://x.org/a.pdf","source":"x.org","type":"PDF"}"#;
        let decoded: SearchResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(decoded.content_type, ContentType::Pdf);
    }

    #[test]
    fn content_type_labels_parse_back() {
        for ct in [
            ContentType::Pdf,
            ContentType::Book,
            ContentType::Video,
            ContentType::ResearchPaper,
            ContentType::Article,
        ] {
            assert_eq!(ct.label().parse::<ContentType>().expect("parse"), ct);
        }
        assert!("Podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn engine_display_uses_name() {
        assert_eq!(Engine::GoogleScholar.to_string(), "Google Scholar");
        assert_eq!(Engine::Arxiv.to_string(), "arXiv");
        assert_eq!(Engine::PubMed.to_string(), "PubMed");
    }

    #[test]
    fn engine_all_has_six_in_query_order() {
        let all = Engine::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Engine::Google);
        assert_eq!(all[5], Engine::Arxiv);
    }

    #[test]
    fn engine_from_key() {
        assert_eq!("scholar".parse::<Engine>().expect("parse"), Engine::GoogleScholar);
        assert_eq!("duckduckgo".parse::<Engine>().expect("parse"), Engine::DuckDuckGo);
        assert!("yahoo".parse::<Engine>().is_err());
        assert!("Google".parse::<Engine>().is_err());
    }
}
