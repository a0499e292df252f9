//! Search orchestrator: sequential multi-source runs, dedup, sort.
//!
//! Sources are queried one after another with a pause in between, then
//! the combined results are deduplicated by link and sorted by source.

pub mod delay;
pub mod merge;
pub mod search;
