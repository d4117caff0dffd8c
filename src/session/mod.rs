//! Persistent state: app directory, user config, saved task file

pub mod config;
pub mod storage;

pub use config::{load_config, save_config, Config, SpacerLength, UiConfig};
pub use storage::Storage;

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "hachi";
pub const TASKS_FILE_NAME: &str = "tasks.txt";

/// Directory holding config and saved tasks, created on first use.
///
/// `~/.config/hachi` on Linux, `~/.hachi` elsewhere.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;

    let dir = if cfg!(target_os = "linux") {
        home.join(".config").join(APP_NAME)
    } else {
        home.join(format!(".{}", APP_NAME))
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Expand a leading `~/` against the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
