//! DuckDuckGo HTML-only endpoint.
//!
//! Each `div.result` carries its title in an `h2` and the target in an
//! `a.result__url`, wrapped in a `//duckduckgo.com/l/?uddg=` redirect
//! that is unwrapped before the domain is taken.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::DuckDuckGo,
    url_template: "https://duckduckgo.com/html/?q={query}",
    fragment: "div.result",
    title: "h2",
    link: "a.result__url",
    link_resolution: LinkResolution::DuckDuckGoRedirect,
    source: SourceLabel::Domain,
};
