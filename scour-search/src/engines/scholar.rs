//! Google Scholar academic index.

use crate::extract::{ExtractionRule, LinkResolution, SourceLabel};
use crate::types::Engine;

pub const RULE: ExtractionRule = ExtractionRule {
    engine: Engine::GoogleScholar,
    url_template: "https://scholar.google.com/scholar?q={query}",
    fragment: "div.gs_ri",
    title: "h3.gs_rt",
    link: "a",
    link_resolution: LinkResolution::AsIs,
    source: SourceLabel::Fixed("Google Scholar"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::types::ContentType;

    const MOCK_SCHOLAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div id="gs_res_ccl_mid">
  <div class="gs_r gs_or gs_scl">
    <div class="gs_ri">
      <h3 class="gs_rt"><a id="a1" href="https://www.nature.com/articles/nature14539">Deep learning</a></h3>
      <div class="gs_a">Y LeCun, Y Bengio, G Hinton - nature, 2015</div>
    </div>
  </div>
  <div class="gs_r gs_or gs_scl">
    <div class="gs_ri">
      <h3 class="gs_rt"><span class="gs_ctc">[PDF]</span> <a href="https://proceedings.neurips.cc/paper/7181-attention.pdf">Attention is all you need</a></h3>
    </div>
  </div>
  <div class="gs_r gs_or gs_scl">
    <div class="gs_ri">
      <h3 class="gs_rt"><span class="gs_ct1">[CITATION]</span> Uncited book with no link</h3>
    </div>
  </div>
</div>
</body>
</html>"#;

    #[test]
    fn parse_mock_html_returns_results() {
        let results = extract(MOCK_SCHOLAR_HTML, &RULE).expect("should parse");
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Deep learning");
        assert_eq!(results[0].link, "https://www.nature.com/articles/nature14539");
        assert_eq!(results[0].source, "Google Scholar");

        assert_eq!(results[1].title, "[PDF] Attention is all you need");
        assert_eq!(results[1].content_type, ContentType::Pdf);
    }
}
