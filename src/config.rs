use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Session configuration, loadable from a TOML file and overridable by CLI
/// flags / environment variables (CLI wins).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_rounds_factor")]
    pub max_rounds_factor: u32,
    #[serde(default)]
    pub players: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_rounds_factor() -> u32 {
    1
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_rounds_factor: default_max_rounds_factor(),
            players: Vec::new(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: &PathBuf) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
