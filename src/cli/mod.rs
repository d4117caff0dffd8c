//! CLI command implementations

pub mod chat;
pub mod definition;
pub mod list;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::session::{Config, Storage};

/// Storage for the task file chosen by flag, config or default
pub fn open_storage(config: &Config, file: Option<PathBuf>) -> Result<Storage> {
    Ok(Storage::new(config.tasks_path(file)?))
}
