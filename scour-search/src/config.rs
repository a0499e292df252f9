//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls request timeouts, the pause between sources
//! during a full search, and the User-Agent sent to each source.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Configuration shared by every adapter.
///
/// Use [`Default::default()`] for the stock behaviour, or construct with
/// field overrides. Missing fields fall back to their defaults when the
/// config is deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Pause in seconds between consecutive sources in a full search.
    pub pause_seconds: u64,
    /// Custom User-Agent string. If `None`, one of a built-in list of
    /// desktop browser User-Agents is used.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            pause_seconds: 2,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(ref ua) = self.user_agent {
            if ua.trim().is_empty() {
                return Err(SearchError::Config("user_agent must not be blank".into()));
            }
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Inter-source pause as a [`Duration`].
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_seconds)
    }
}
