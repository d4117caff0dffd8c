//! Task storage - plain text file persistence

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::task::{TaskList, TasksFile};

pub struct Storage {
    tasks_path: PathBuf,
    /// Lines from the last load that did not decode; written back on save
    unreadable: Vec<String>,
}

impl Storage {
    pub fn new(tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: tasks_path.into(),
            unreadable: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Read the saved list, creating an empty file if none exists yet.
    ///
    /// Lines that fail to decode are remembered and kept in the file by
    /// later saves.
    pub fn load(&mut self) -> Result<TaskList> {
        self.unreadable.clear();
        if !self.tasks_path.exists() {
            debug!("No task file at {:?}, creating one", self.tasks_path);
            if let Some(parent) = self.tasks_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.tasks_path, "")
                .with_context(|| format!("Failed to create {:?}", self.tasks_path))?;
            return Ok(TaskList::new());
        }

        let file = TasksFile::from_file(&self.tasks_path)?;
        if !file.skipped.is_empty() {
            warn!(
                "Keeping {} unreadable line(s) in {:?} as-is",
                file.skipped.len(),
                self.tasks_path
            );
        }
        self.unreadable = file.unreadable_lines();
        Ok(file.into_list())
    }

    /// Overwrite the file with the whole list, then any unreadable lines
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        // Create backup
        if self.tasks_path.exists() {
            let mut backup_path = self.tasks_path.clone().into_os_string();
            backup_path.push(".bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        TasksFile::write_to_file(tasks, &self.unreadable, &self.tasks_path)?;
        debug!("Saved {} task(s) to {:?}", tasks.len(), self.tasks_path);
        Ok(())
    }
}
