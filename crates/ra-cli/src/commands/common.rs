//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ra_core::{Config, InputDocument};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Configuration plus the directory its relative paths resolve against
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) base_dir: PathBuf,
}

/// Load `--config` if given, otherwise look for relalg.yml in the current directory
pub(crate) fn load_config(global: &GlobalArgs) -> Result<LoadedConfig> {
    match &global.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            Ok(LoadedConfig { config, base_dir })
        }
        None => {
            let base_dir = PathBuf::from(".");
            let config = Config::discover(&base_dir).context("Failed to load config")?;
            Ok(LoadedConfig { config, base_dir })
        }
    }
}

/// Input path from the command line, or from the config relative to its directory
pub(crate) fn resolve_input(arg: Option<&Path>, loaded: &LoadedConfig) -> PathBuf {
    match arg {
        Some(path) => path.to_path_buf(),
        None => loaded.base_dir.join(&loaded.config.input),
    }
}

/// Read and parse an input document
pub(crate) fn load_document(path: &Path) -> Result<InputDocument> {
    ra_core::load_document(path)
        .with_context(|| format!("Failed to load input document: {}", path.display()))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
