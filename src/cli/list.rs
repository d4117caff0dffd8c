//! `hachi list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::session::Config;
use crate::task::{Task, TaskError, TaskList, TasksFile};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

pub fn run(config: &Config, file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let tasks = load_tasks(&config.tasks_path(file)?)?;
    println!("{}", render(&tasks, args.json)?);
    Ok(())
}

/// Read the saved list without creating or rewriting anything
fn load_tasks(path: &Path) -> Result<TaskList> {
    if !path.exists() {
        debug!("No task file at {:?}", path);
        return Ok(TaskList::new());
    }
    Ok(TasksFile::from_file(path)?.into_list())
}

fn render(tasks: &TaskList, json: bool) -> Result<String> {
    if json {
        let items: Vec<TaskJson> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskJson { index: i + 1, task })
            .collect();
        return Ok(serde_json::to_string_pretty(&items)?);
    }

    match tasks.retrieve_list() {
        Ok(entries) => Ok(entries
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        Err(TaskError::EmptyList) => Ok("No tasks found.".to_string()),
        Err(e) => Err(e.into()),
    }
}
