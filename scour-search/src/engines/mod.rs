//! Per-source extraction rules.
//!
//! Each module holds one [`ExtractionRule`] describing a source's results
//! page. The selectors track the live markup of each site and are the
//! first thing to check when a source starts returning nothing.

pub mod arxiv;
pub mod bing;
pub mod duckduckgo;
pub mod google;
pub mod pubmed;
pub mod scholar;

use crate::extract::ExtractionRule;
use crate::types::Engine;

/// Returns the extraction rule for `engine`.
pub fn rule_for(engine: Engine) -> &'static ExtractionRule {
    match engine {
        Engine::Google => &google::RULE,
        Engine::Bing => &bing::RULE,
        Engine::DuckDuckGo => &duckduckgo::RULE,
        Engine::PubMed => &pubmed::RULE,
        Engine::GoogleScholar => &scholar::RULE,
        Engine::Arxiv => &arxiv::RULE,
    }
}
