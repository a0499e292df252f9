//! Declarative extraction rules and the routine that applies them.
//!
//! Every source is described by one [`ExtractionRule`]: where to send the
//! query and which CSS selectors pick out a result, its title and its
//! link. Site markup changes are handled by editing a rule in
//! [`crate::engines`]; nothing here is source-specific.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::classify::classify;
use crate::error::SearchError;
use crate::types::{Engine, SearchResult};

/// Placeholder in [`ExtractionRule::url_template`] replaced by the raw query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// How the `href` of a link element becomes a result link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkResolution {
    /// Use the attribute value unchanged.
    AsIs,
    /// Resolve against the given origin. Absolute hrefs are kept as they are.
    Origin(&'static str),
    /// Unwrap DuckDuckGo's `//duckduckgo.com/l/?uddg=` redirect.
    DuckDuckGoRedirect,
}

/// Where a result's `source` label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLabel {
    /// The authority part of the link: its third `/`-separated segment.
    Domain,
    /// A fixed label.
    Fixed(&'static str),
}

/// Extraction rule for one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    /// The source this rule scrapes.
    pub engine: Engine,
    /// Results page URL containing [`QUERY_PLACEHOLDER`].
    pub url_template: &'static str,
    /// Selector matching one result fragment.
    pub fragment: &'static str,
    /// Selector for the title element, searched within the fragment.
    pub title: &'static str,
    /// Selector for the link element, searched within the fragment.
    pub link: &'static str,
    /// How the link element's `href` is turned into a link.
    pub link_resolution: LinkResolution,
    /// How `source` is filled in.
    pub source: SourceLabel,
}

impl ExtractionRule {
    /// Substitute `query` into the URL template verbatim.
    ///
    /// No encoding is applied here; the transport encodes what it must.
    pub fn request_url(&self, query: &str) -> String {
        self.url_template.replace(QUERY_PLACEHOLDER, query)
    }
}

/// Apply `rule` to a results page.
///
/// Fragments lacking a title element, a link element, an `href`, or (for
/// [`SourceLabel::Domain`]) a domain segment are skipped.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if a selector in the rule is invalid and
/// [`SearchError::ExtractionEmpty`] if no fragment matched at all.
pub fn extract(html: &str, rule: &ExtractionRule) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let fragment_sel = parse_selector(rule.fragment, "fragment")?;
    let title_sel = parse_selector(rule.title, "title")?;
    let link_sel = parse_selector(rule.link, "link")?;

    let mut fragments = 0usize;
    let mut results = Vec::new();

    for (index, fragment) in document.select(&fragment_sel).enumerate() {
        fragments += 1;
        match extract_record(fragment, &title_sel, &link_sel, rule) {
            Some(result) => results.push(result),
            None => {
                tracing::debug!(engine = %rule.engine, index, "partial record skipped");
            }
        }
    }

    if fragments == 0 {
        return Err(SearchError::ExtractionEmpty(rule.engine.name().to_string()));
    }

    tracing::debug!(
        engine = %rule.engine,
        fragments,
        count = results.len(),
        "results extracted"
    );
    Ok(results)
}

fn parse_selector(css: &str, what: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid {what} selector: {e:?}")))
}

fn extract_record(
    fragment: ElementRef<'_>,
    title_sel: &Selector,
    link_sel: &Selector,
    rule: &ExtractionRule,
) -> Option<SearchResult> {
    let title_el = fragment.select(title_sel).next()?;
    let link_el = fragment.select(link_sel).next()?;

    let href = link_el.value().attr("href")?;
    let link = resolve_link(href, rule.link_resolution)?;

    let source = match rule.source {
        SourceLabel::Domain => domain_segment(&link)?.to_string(),
        SourceLabel::Fixed(label) => label.to_string(),
    };

    Some(SearchResult {
        title: title_el.text().collect::<String>().trim().to_string(),
        content_type: classify(&link),
        link,
        source,
    })
}

/// Turn an `href` into a result link according to `resolution`.
pub fn resolve_link(href: &str, resolution: LinkResolution) -> Option<String> {
    match resolution {
        LinkResolution::AsIs => Some(href.to_string()),
        LinkResolution::Origin(origin) => {
            let base = Url::parse(origin).ok()?;
            base.join(href).ok().map(String::from)
        }
        LinkResolution::DuckDuckGoRedirect => unwrap_duckduckgo_redirect(href),
    }
}

/// Extract the target URL from DuckDuckGo's redirect wrapper.
///
/// DDG wraps URLs like `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Links that are not redirects are returned with protocol-relative
/// forms made `https:`.
fn unwrap_duckduckgo_redirect(href: &str) -> Option<String> {
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };

    let parsed = match Url::parse(&full_href) {
        Ok(parsed) => parsed,
        Err(_) => return Some(full_href),
    };

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full_href)
    }
}

/// The third `/`-separated segment of `link` (its authority).
///
/// The segment may be empty, as for root-relative links like `/url?q=...`.
/// `None` only when `link` has fewer than three segments.
pub fn domain_segment(link: &str) -> Option<&str> {
    link.split('/').nth(2)
}
