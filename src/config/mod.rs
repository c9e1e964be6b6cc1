//! Configuration system for vimquill.
//!
//! This module provides the configuration structure with sensible defaults and
//! support for serialization/deserialization via serde. Configuration is read
//! from `~/.config/vimquill/config.toml`; every field is optional in the file.
//!
//! # Example
//!
//! ```
//! use vimquill::config::Config;
//! use vimquill::editor::resolver::ResolvePolicy;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.resolve_policy, ResolvePolicy::LastMatch);
//! assert_eq!(config.undo_session_limit, 50);
//!
//! // Create custom configuration
//! let custom = Config {
//!     track_marks_in_viewers: true,
//!     ..Config::default()
//! };
//! assert!(custom.track_marks_in_viewers);
//! ```

use crate::editor::resolver::ResolvePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the vimquill editor data layer.
///
/// # Fields
///
/// * `resolve_policy` - Which match wins when an editor shows up under several
///   open files: "last-match" or "first-match" (default: "last-match")
/// * `track_marks_in_viewers` - Track marks in read-only viewers too (default: false)
/// * `undo_session_limit` - Closed-document undo sessions to retain (default: 50)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tie-breaking for project/file resolution
    #[serde(default)]
    pub resolve_policy: ResolvePolicy,

    /// Install mark tracking on viewers as well as editors
    #[serde(default)]
    pub track_marks_in_viewers: bool,

    /// Maximum number of retained undo sessions for closed documents
    #[serde(default = "default_undo_session_limit")]
    pub undo_session_limit: usize,
}

/// Returns the default retained undo session limit.
fn default_undo_session_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolve_policy: ResolvePolicy::default(),
            track_marks_in_viewers: false,
            undo_session_limit: default_undo_session_limit(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vimquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vimquill");
            path.push("config.toml");
            path
        })
    }

    /// Reads configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::from_file(&config_path).unwrap_or_else(|err| {
            log::warn!("{}; using default configuration", err);
            Self::default()
        })
    }

    /// Writes configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_policy_uses_kebab_case() {
        let config: Config = toml::from_str("resolve_policy = \"first-match\"").unwrap();
        assert_eq!(config.resolve_policy, ResolvePolicy::FirstMatch);
        assert_eq!(config.undo_session_limit, 50);
    }
}
