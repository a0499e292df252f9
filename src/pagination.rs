//! Fixed-size pages over a result list.

use serde::Serialize;

/// One page of items plus the numbers needed to render page links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page; empty past the last page.
    pub items: Vec<T>,
    /// The 1-based page number served.
    pub page: usize,
    /// `ceil(total / per_page)`; zero for an empty list.
    pub total_pages: usize,
}

/// Cut page `page` (1-based) of `per_page` items out of `items`.
///
/// Page numbers below 1 are served as page 1. A `per_page` of 0 is
/// treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
    }
}
