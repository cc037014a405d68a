use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::platform;
use crate::catalog::{Catalog, CatalogError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
}

/// Channel catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a `.toml`, `.json` or `.m3u` catalog.  Empty means the bundled
    /// catalog.
    #[serde(default)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Delay between selecting a channel and treating it as ready.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub show_keys_bar: bool,
}

/// How URLs are opened outside the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Command line prefix; the URL is appended as the last argument.
    /// Empty means the platform default (`xdg-open`, `open`, `start`).
    #[serde(default)]
    pub command: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_true(),
            show_keys_bar: default_true(),
        }
    }
}

fn default_settle_delay_ms() -> u64 {
    crate::selection::DEFAULT_SETTLE_DELAY.as_millis() as u64
}

fn default_true() -> bool {
    true
}

impl PlayerConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl NavigatorConfig {
    /// Program and leading arguments, falling back to the platform default.
    pub fn command_line(&self) -> Vec<String> {
        let parts: Vec<String> = self
            .command
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if parts.is_empty() {
            platform::default_open_command()
        } else {
            parts
        }
    }
}

impl CatalogConfig {
    /// Load the configured catalog, or the bundled one when no path is set.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        if self.path.as_os_str().is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::load(&self.path)
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
