//! Configuration types and parsing for relalg.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names probed by [`Config::discover`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["relalg.yml", "relalg.yaml"];

/// Evaluation and presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input document read when no path is given on the command line
    #[serde(default = "default_input")]
    pub input: String,

    /// Text shown for null cells produced by outer joins
    #[serde(default = "default_null_marker")]
    pub null_marker: String,

    /// Print every intermediate step of the evaluation
    #[serde(default)]
    pub explain: bool,
}

fn default_input() -> String {
    "input.txt".to_string()
}

fn default_null_marker() -> String {
    "NULL".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            null_marker: default_null_marker(),
            explain: false,
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load relalg.yml or relalg.yaml from a directory, falling back to defaults
    pub fn discover(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
        {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.input.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "input path cannot be empty".to_string(),
            });
        }
        if self.null_marker.contains('\n') {
            return Err(CoreError::ConfigInvalid {
                message: "null_marker must fit on one line".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
