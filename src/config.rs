use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use droprate_dry_streak::{DESTROY_RATE, DryStreakConfig, SEARCH_RATE};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "droprate.toml";

/// Top-level droprate configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DroprateConfig {
    /// Dry-streak calculator settings.
    #[serde(default)]
    pub dry_streak: DryStreakToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DryStreakToml {
    #[serde(default = "default_search_rate")]
    pub search_rate: u64,
    #[serde(default = "default_destroy_rate")]
    pub destroy_rate: u64,
    #[serde(default = "default_search_label")]
    pub search_label: String,
    #[serde(default = "default_destroy_label")]
    pub destroy_label: String,
    #[serde(default = "default_reward")]
    pub reward: String,
}

impl Default for DryStreakToml {
    fn default() -> Self {
        Self {
            search_rate: default_search_rate(),
            destroy_rate: default_destroy_rate(),
            search_label: default_search_label(),
            destroy_label: default_destroy_label(),
            reward: default_reward(),
        }
    }
}

fn default_search_rate() -> u64 {
    SEARCH_RATE
}
fn default_destroy_rate() -> u64 {
    DESTROY_RATE
}
fn default_search_label() -> String {
    "searches".to_string()
}
fn default_destroy_label() -> String {
    "destroys".to_string()
}
fn default_reward() -> String {
    "Araxxor Pet".to_string()
}

impl DryStreakToml {
    /// Convert into the validated library configuration.
    pub fn to_config(&self) -> Result<DryStreakConfig> {
        let config = DryStreakConfig::new()
            .with_search_rate(self.search_rate)
            .with_destroy_rate(self.destroy_rate);
        config.validate().context("invalid [dry_streak] settings")?;
        Ok(config)
    }
}

impl DroprateConfig {
    /// Parse a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
    }

    /// Load configuration for a run.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present; otherwise built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
        if fallback.is_file() {
            info!(path = %fallback.display(), "loading config");
            return Self::from_file(&fallback);
        }
        debug!("no config file, using defaults");
        Ok(Self::default())
    }
}
