//! Per-browser session state: the last result list and saved results.
//!
//! Sessions live in memory only and are keyed by a random UUID carried
//! in a cookie. Nothing survives a restart, and idle or excess sessions
//! are evicted.

use std::fmt;
use std::time::Duration;

use moka::sync::Cache;
use scour_search::SearchResult;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Sessions kept before the least useful ones are evicted.
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;

/// A session untouched for this long is dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// State held for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionData {
    /// Results of the most recent search.
    pub results: Vec<SearchResult>,
    /// Results the user chose to keep, in the order they were saved.
    pub saved: Vec<SearchResult>,
}

/// Shared, cloneable, bounded map of session id to [`SessionData`].
///
/// Backed by a [`moka`] cache: at most `max_sessions` live at once and a
/// session idle for longer than the idle timeout is evicted.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, SessionData>,
}

impl SessionStore {
    /// A store with [`DEFAULT_MAX_SESSIONS`] and [`DEFAULT_IDLE_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_IDLE_TIMEOUT)
    }

    /// A store holding at most `max_sessions`, each dropped after
    /// `time_to_idle` without access.
    pub fn with_limits(max_sessions: u64, time_to_idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(time_to_idle)
                .build(),
        }
    }

    /// Allocate a fresh session id. The session itself is created on first write.
    pub fn new_session_id() -> Uuid {
        Uuid::new_v4()
    }

    /// Apply `update` to the session, creating it if absent.
    fn upsert(&self, id: Uuid, update: impl FnOnce(&mut SessionData)) {
        self.cache.entry(id).and_upsert_with(|existing| {
            let mut data = existing.map(|entry| entry.into_value()).unwrap_or_default();
            update(&mut data);
            data
        });
    }

    /// Snapshot of a session; empty if the session does not exist.
    pub fn get(&self, id: Uuid) -> SessionData {
        self.cache.get(&id).unwrap_or_default()
    }

    /// Replace the stored results.
    pub fn set_results(&self, id: Uuid, results: Vec<SearchResult>) {
        self.upsert(id, |data| data.results = results);
    }

    /// Forget the stored results, keeping saved ones.
    pub fn clear_results(&self, id: Uuid) {
        if self.cache.contains_key(&id) {
            self.upsert(id, |data| data.results.clear());
        }
    }

    /// The stored results.
    pub fn results(&self, id: Uuid) -> Vec<SearchResult> {
        self.get(id).results
    }

    /// Append a result to the saved list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if any field is empty.
    pub fn save_result(&self, id: Uuid, result: SearchResult) -> Result<()> {
        if result.title.is_empty() || result.link.is_empty() || result.source.is_empty() {
            return Err(AppError::BadRequest("Invalid result data".into()));
        }
        self.upsert(id, |data| data.saved.push(result));
        Ok(())
    }

    /// Remove the saved result at `index`. Out-of-range indexes are ignored.
    ///
    /// Returns whether a result was removed.
    pub fn delete_saved(&self, id: Uuid, index: usize) -> bool {
        if !self.cache.contains_key(&id) {
            return false;
        }
        let mut removed = false;
        self.upsert(id, |data| {
            if index < data.saved.len() {
                data.saved.remove(index);
                removed = true;
            }
        });
        removed
    }

    /// The saved results.
    pub fn saved(&self, id: Uuid) -> Vec<SearchResult> {
        self.get(id).saved
    }

    /// Drop the whole session.
    pub fn clear(&self, id: Uuid) {
        self.cache.invalidate(&id);
    }

    /// Number of live sessions, after pending evictions have run.
    pub fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
