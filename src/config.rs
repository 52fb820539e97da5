use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::keybindings::KeybindingsConfig;
use crate::utils::paths::{get_config_path, get_default_data_path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Dashboard JSON file; `~/.wallet-deck/dashboard.json` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            data_file: None,
            tick_rate_ms: default_tick_rate_ms(),
            keybindings: KeybindingsConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config: {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.keybindings = config.keybindings.merge_with_defaults();
        Ok(config)
    }

    /// The data file to use, with `override_path` taking precedence.
    pub fn data_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        match override_path.or_else(|| self.data_file.clone()) {
            Some(path) => Ok(path),
            None => get_default_data_path(),
        }
    }
}
