//! arXiv preprint search.
//!
//! Each `li.arxiv-result` has the title in `p.title` and an abstract link
//! carrying `title="Abstract"`.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const ORIGIN: &str = "https://arxiv.org";

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::Arxiv,
    url_template: "https://arxiv.org/search/?query={query}&searchtype=all&source=header",
    fragment: "li.arxiv-result",
    title: "p.title",
    link: r#"a[title="Abstract"]"#,
    link_resolution: LinkResolution::Origin(ORIGIN),
    source: SourceLabel::Fixed("arXiv"),
};
