//! Bing web search.
//!
//! Organic results are `li.b_algo` items with the title in an `h2`.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::Bing,
    url_template: "https://www.bing.com/search?q={query}",
    fragment: "li.b_algo",
    title: "h2",
    link: "a",
    link_resolution: LinkResolution::AsIs,
    source: SourceLabel::Domain,
};
