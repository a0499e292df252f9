//! Google web search.
//!
//! Organic results sit in `div.tF2Cxc` blocks with the title in an `h3`
//! and the target as the first anchor. Google blocks automated clients
//! aggressively, so an empty result set here is common.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::Google,
    url_template: "https://www.google.com/search?q={query}",
    fragment: "div.tF2Cxc",
    title: "h3",
    link: "a",
    link_resolution: LinkResolution::AsIs,
    source: SourceLabel::Domain,
};
