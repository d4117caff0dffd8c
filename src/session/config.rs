//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::{expand_home, get_app_dir, TASKS_FILE_NAME};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks are saved; defaults to `tasks.txt` in the app directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub spacer: SpacerLength,

    #[serde(default = "default_true")]
    pub show_help_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            spacer: SpacerLength::default(),
            show_help_on_start: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Width of the tilde line printed between replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerLength {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpacerLength {
    pub fn width(&self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 40,
            Self::Large => 60,
        }
    }
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Resolve the task file: explicit override, then `data_file`, then the default.
    pub fn tasks_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path);
        }
        match &self.data_file {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_app_dir()?.join(TASKS_FILE_NAME)),
        }
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
