use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::Profile;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// kitty-style color file for the terminal view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,

    /// Shown when no profile is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<Profile>,
}

impl AppConfig {
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("profile-card");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file; any problem falls back to defaults.
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("{}", e);
                return AppConfig::default();
            }
        };

        if !path.exists() {
            return AppConfig::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config: {}", e);
                AppConfig::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config: {}", e);
                AppConfig::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
