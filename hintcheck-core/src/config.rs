//! Configuration loading from hintcheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for hintcheck.toml.
#[derive(Debug, Deserialize, Default)]
pub struct HintcheckConfig {
    /// Function names or patterns to skip during checking.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from hintcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<HintcheckConfig>> {
    let path = root.join("hintcheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid hintcheck.toml")?;
    Ok(Some(cfg))
}
