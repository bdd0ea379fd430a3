use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level whence configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WhenceConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Reference-instant settings.
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "iso" or "unix".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Fixed offset applied when the reference comes from the system
    /// clock, e.g. "+05:30". UTC when unset.
    pub offset: Option<String>,
}

fn default_format() -> String {
    "iso".to_string()
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<WhenceConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
