// File: src/config.rs
// Purpose: Configuration parsing from dih.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory the view templates are served from (default: "assets/partials")
    #[serde(default = "default_partials_dir")]
    pub partials_dir: String,

    /// Whether static segments match case-insensitively (default: false)
    #[serde(default)]
    pub case_insensitive: bool,

    /// Where unmatched locations are redirected (default: "/")
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_partials_dir() -> String {
    "assets/partials".to_string()
}

fn default_fallback() -> String {
    "/".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            partials_dir: default_partials_dir(),
            case_insensitive: false,
            fallback: default_fallback(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
