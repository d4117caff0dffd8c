//! Saved task file parser and writer

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use super::error::TaskError;
use super::list::TaskList;
use super::model::Task;

/// Represents a parsed task file
#[derive(Debug, Clone, Default)]
pub struct TasksFile {
    /// Tasks in file order
    pub tasks: Vec<Task>,

    /// Lines that could not be decoded
    pub skipped: Vec<SkippedLine>,
}

/// A saved line that did not decode, kept verbatim so it can be written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub error: TaskError,
}

impl TasksFile {
    /// Parse a task file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tasks from {:?}", path))?;
        Ok(Self::parse(&content))
    }

    /// Parse task file content.
    ///
    /// Blank lines are ignored. Lines that fail to decode are kept in
    /// `skipped` so one bad line does not lose the whole list.
    pub fn parse(content: &str) -> Self {
        let mut file = Self::default();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match Task::from_line(line) {
                Ok(task) => file.tasks.push(task),
                Err(e) => {
                    warn!("Skipping line {} of task file: {}", i + 1, e);
                    file.skipped.push(SkippedLine {
                        number: i + 1,
                        text: line.to_string(),
                        error: e,
                    });
                }
            }
        }

        file
    }

    pub fn into_list(self) -> TaskList {
        TaskList::from_tasks(self.tasks)
    }

    /// Raw text of every skipped line, in file order
    pub fn unreadable_lines(&self) -> Vec<String> {
        self.skipped.iter().map(|s| s.text.clone()).collect()
    }

    /// Encode a list, one task per line, followed by `unreadable` lines as-is
    pub fn to_text(list: &TaskList, unreadable: &[String]) -> String {
        let mut output = String::new();
        for task in list {
            output.push_str(&task.to_line());
            output.push('\n');
        }
        for line in unreadable {
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    /// Overwrite `path` with the encoded list
    pub fn write_to_file(list: &TaskList, unreadable: &[String], path: &Path) -> Result<()> {
        std::fs::write(path, Self::to_text(list, unreadable))
            .with_context(|| format!("Failed to write tasks to {:?}", path))?;
        Ok(())
    }
}
