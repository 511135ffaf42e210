//! Client configuration.
//!
//! Loaded from ~/.config/hoopdle/config.toml when present, with
//! environment variables taking precedence. A missing or unreadable
//! config file falls back to defaults; only a file that exists but does
//! not parse is reported as an error.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use hoopdle_core::error::Result;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "HOOPDLE_API_URL";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "HOOPDLE_TIMEOUT_SECS";

/// Connection settings for the game API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the game API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default config file location, then
    /// applies environment overrides.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(
            env::var(ENV_BASE_URL).ok(),
            env::var(ENV_TIMEOUT_SECS).ok(),
        ))
    }

    /// Loads configuration from a specific TOML file. A missing file
    /// yields defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Applies environment-style overrides on top of file values.
    ///
    /// An unparseable timeout override is rejected rather than silently
    /// ignored, so a typo in the environment does not masquerade as the
    /// file value.
    pub fn with_env_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = timeout_secs {
            if let Ok(secs) = raw.trim().parse::<u64>() {
                self.timeout_secs = secs;
            } else {
                tracing::warn!(value = %raw, "ignoring unparseable {ENV_TIMEOUT_SECS}");
            }
        }
        self
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hoopdle").join("config.toml"))
    }
}
