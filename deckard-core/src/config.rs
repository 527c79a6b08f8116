//! # Configuration Management
//!
//! Handles the configuration directories and the `config.toml` file for the
//! deckard tool, following the platform's base directory conventions.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::consts::CONFIG_FILE_NAME;

/// GitHub section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitHubConfig {
  /// Personal access token; the `GITHUB_TOKEN` environment variable wins over it
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,

  /// API root, e.g. `https://ghe.example.com/api/v3` for GitHub Enterprise
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub api_url: Option<String>,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckardConfig {
  #[serde(default)]
  pub github: GitHubConfig,
}

/// Represents the configuration directories for the deckard application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub cache_dir: Option<PathBuf>,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("eddieland", "", "deckard").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      cache_dir: Some(proj_dirs.cache_dir().to_path_buf()),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the cache directory
  pub fn cache_dir(&self) -> Option<&PathBuf> {
    self.cache_dir.as_ref()
  }

  /// Get the path to the configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Create the directories and an empty configuration file if none exists
  pub fn init(&self) -> Result<()> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
    if let Some(cache_dir) = &self.cache_dir {
      fs::create_dir_all(cache_dir).context("Failed to create cache directory")?;
    }

    if !self.config_path().exists() {
      self.save_config(&DeckardConfig::default())?;
    }

    Ok(())
  }

  /// Load the configuration file, or defaults when it doesn't exist
  pub fn load_config(&self) -> Result<DeckardConfig> {
    let config_path = self.config_path();

    if !config_path.exists() {
      return Ok(DeckardConfig::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", config_path.display()))
  }

  /// Save the configuration file
  pub fn save_config(&self, config: &DeckardConfig) -> Result<()> {
    let config_path = self.config_path();

    if let Some(parent) = config_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}
