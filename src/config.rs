//! Configuration file handling.
//!
//! Reads an optional TOML file from `<config_dir>/calcpad/config.toml`
//! (or an explicit path from the command line). Every key is optional and
//! a missing default file just yields the built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_MAX_DISPLAY_LEN;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum length of manually entered display text.
    pub max_display_length: usize,
    /// Terminal event poll interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_display_length: DEFAULT_MAX_DISPLAY_LEN,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse; the default path is allowed
    /// to be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let Some(default) = Self::default_path() else {
                    return Ok(Self::default());
                };
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }
}
