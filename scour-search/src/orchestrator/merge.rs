//! Merging of per-source result sets.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Concatenate result sets, drop repeated links, and sort by source.
///
/// The first occurrence of each `link` (exact string match) is kept.
/// The sort on `source` is stable, so results from the same source stay
/// in the order they were first seen.
pub fn merge(result_sets: Vec<Vec<SearchResult>>) -> Vec<SearchResult> {
    let total: usize = result_sets.iter().map(Vec::len).sum();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut unique: Vec<SearchResult> = Vec::with_capacity(total);

    for result in result_sets.into_iter().flatten() {
        if seen.insert(result.link.clone()) {
            unique.push(result);
        }
    }

    // `sort_by` is stable.
    unique.sort_by(|a, b| a.source.cmp(&b.source));

    tracing::debug!(total, unique = unique.len(), "result sets merged");
    unique
}
