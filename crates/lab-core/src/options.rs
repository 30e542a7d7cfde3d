//! Game options and configuration
//!
//! Options come from an optional TOML file; fields left out keep their
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_PROMPT;

/// Errors while loading an options file
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("could not read options file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Shown before each command
    pub prompt: String,
    /// Print the welcome banner at start
    pub welcome: bool,
    /// Print each command read, for replaying scripts
    pub echo_input: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: true,
            echo_input: false,
            log_level: "warn".to_string(),
        }
    }
}

impl GameOptions {
    /// Parse options from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| OptionsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
