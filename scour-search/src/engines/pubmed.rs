//! PubMed biomedical index.
//!
//! Result titles are `a.docsum-title` anchors whose `href` is a path
//! relative to the PubMed origin.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const ORIGIN: &str = "https://pubmed.ncbi.nlm.nih.gov";

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::PubMed,
    url_template: "https://pubmed.ncbi.nlm.nih.gov/?term={query}",
    fragment: "div.docsum-content",
    title: "a.docsum-title",
    link: "a.docsum-title",
    link_resolution: LinkResolution::Origin(ORIGIN),
    source: SourceLabel::Fixed("PubMed"),
};
