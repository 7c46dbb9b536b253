use anyhow::{Context, Result};
use scorefeed_parser::PlatformAliases;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional run configuration, read from TOML
///
/// ```toml
/// [[platforms]]
/// name = "android"
/// aliases = ["Android", ":android:", "<:android:"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Ordered alias table; the built-in table when omitted
    #[serde(default)]
    pub platforms: PlatformAliases,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }
}
