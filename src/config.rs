use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Value sent as the `offset` query parameter on both transaction endpoints.
/// The backend treats it as a page size.
pub const DEFAULT_OFFSET: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub offset: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            offset: DEFAULT_OFFSET,
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/addrscan on Linux)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("addrscan"))
            .context("Could not determine config directory")
    }

    /// Returns the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or return defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        Self::parse(&contents).with_context(|| format!("Failed to parse config file {path:?}"))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Log file location: explicit setting, else the platform cache dir
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        dirs::cache_dir()
            .map(|p| p.join("addrscan").join("addrscan.log"))
            .context("Could not determine cache directory")
    }
}
