//! Full search across every source, one source at a time.
//!
//! Sources are queried strictly in sequence with a pause before each one
//! after the first, then merged. Nothing runs concurrently; a slow source
//! holds up the ones behind it.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::engine::{EngineAdapter, SearchAdapter};
use crate::http::Fetcher;
use crate::types::{Engine, SearchResult};

use super::delay::DelayPolicy;
use super::merge::merge;

/// Build one [`EngineAdapter`] per engine in [`Engine::all`] order.
pub fn default_adapters<F: Fetcher>(fetcher: Arc<F>, config: &SearchConfig) -> Vec<EngineAdapter<F>> {
    Engine::all()
        .iter()
        .map(|engine| EngineAdapter::new(*engine, Arc::clone(&fetcher), config))
        .collect()
}

/// Query each adapter in turn and merge the results.
///
/// # Pipeline
///
/// 1. For each adapter, in order: wait `delay.delay()` (skipped before the
///    first), then search
/// 2. Log each adapter's result count
/// 3. [`merge`]: concatenate, dedupe by link, sort by source
pub async fn run_all<A, D>(adapters: &[A], query: &str, delay: &D) -> Vec<SearchResult>
where
    A: SearchAdapter,
    D: DelayPolicy + ?Sized,
{
    let mut result_sets = Vec::with_capacity(adapters.len());

    for (index, adapter) in adapters.iter().enumerate() {
        if index > 0 {
            let pause = delay.delay();
            if !pause.is_zero() {
                tracing::trace!(?pause, next = %adapter.engine(), "pausing between sources");
                tokio::time::sleep(pause).await;
            }
        }

        let results = adapter.search(query).await;
        tracing::debug!(engine = %adapter.engine(), count = results.len(), "source finished");
        result_sets.push(results);
    }

    let before: usize = result_sets.iter().map(Vec::len).sum();
    let merged = merge(result_sets);
    tracing::info!(before, unique = merged.len(), "full search complete");
    merged
}
