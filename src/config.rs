//! Configuration types for the scour front-end.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use scour_search::SearchConfig;

use crate::error::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Result paging.
    pub pagination: PaginationConfig,
    /// Session store limits.
    pub session: SessionConfig,
    /// Settings passed to the search core.
    pub search: SearchConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Result paging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Results shown per page.
    pub per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { per_page: 10 }
    }
}

/// Session store limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions kept in memory at once.
    pub max_sessions: u64,
    /// Minutes without a request before a session is dropped.
    pub idle_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: crate::session::DEFAULT_MAX_SESSIONS,
            idle_minutes: crate::session::DEFAULT_IDLE_TIMEOUT.as_secs() / 60,
        }
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_minutes.saturating_mul(60))
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/scour/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("scour").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("scour")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/scour-config/config.toml")
        }
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for a zero page size or session limit
    /// and [`AppError::Search`] for an invalid search section.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.pagination.per_page == 0 {
            return Err(AppError::Config(
                "pagination.per_page must be greater than 0".into(),
            ));
        }
        if self.session.max_sessions == 0 {
            return Err(AppError::Config(
                "session.max_sessions must be greater than 0".into(),
            ));
        }
        if self.session.idle_minutes == 0 {
            return Err(AppError::Config(
                "session.idle_minutes must be greater than 0".into(),
            ));
        }
        self.search.validate()?;
        Ok(())
    }
}
