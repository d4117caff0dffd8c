//! Command word recognition and dispatch into the task list

use std::str::FromStr;
use tracing::debug;

use super::input::Input;
use crate::task::{Result, Task, TaskError, TaskList, TaskType};

/// Every command word the chatbot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Bye,
    Goodbye,
    Help,
}

impl FromStr for CommandWord {
    type Err = TaskError;

    /// Expects an already-normalized (uppercase) word.
    fn from_str(word: &str) -> Result<Self> {
        match word {
            "LIST" => Ok(Self::List),
            "MARK" => Ok(Self::Mark),
            "UNMARK" => Ok(Self::Unmark),
            "DELETE" => Ok(Self::Delete),
            "TODO" => Ok(Self::Todo),
            "DEADLINE" => Ok(Self::Deadline),
            "EVENT" => Ok(Self::Event),
            "BYE" => Ok(Self::Bye),
            "GOODBYE" => Ok(Self::Goodbye),
            "HELP" => Ok(Self::Help),
            _ => Err(TaskError::InvalidCommand(word.to_string())),
        }
    }
}

/// What a successfully handled command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added { task: Task, total: usize },
    Listed(Vec<String>),
    Updated { number: usize, task: Task },
    Deleted { task: Task, remaining: usize },
    Help,
    Goodbye,
}

impl Reply {
    /// Whether the task list changed and should be saved
    pub fn changes_tasks(&self) -> bool {
        matches!(
            self,
            Reply::Added { .. } | Reply::Updated { .. } | Reply::Deleted { .. }
        )
    }

    /// Whether the session should end
    pub fn is_goodbye(&self) -> bool {
        matches!(self, Reply::Goodbye)
    }
}

/// Pick the task type from the literal prefix of the normalized line
pub fn task_type_for(normalized: &str) -> TaskType {
    if normalized.starts_with("EVENT") {
        TaskType::Event
    } else if normalized.starts_with("DEADLINE") {
        TaskType::Deadline
    } else {
        TaskType::Todo
    }
}

/// Run one command against the task list.
///
/// `first_word` is the normalized command word of `input`.
pub fn process_command(first_word: &str, input: &Input<'_>, tasks: &mut TaskList) -> Result<Reply> {
    let command = first_word.parse::<CommandWord>().map_err(|_| {
        let typed = input.slice(0, first_word.len()).unwrap_or(first_word);
        TaskError::InvalidCommand(typed.to_string())
    })?;
    debug!("Processing {:?}", command);

    match command {
        CommandWord::List => {
            let lines = tasks.retrieve_list()?.map(|entry| entry.to_string()).collect();
            Ok(Reply::Listed(lines))
        }
        CommandWord::Mark | CommandWord::Unmark => {
            let (number, task) = tasks.mark_or_unmark(input)?;
            Ok(Reply::Updated {
                number,
                task: task.clone(),
            })
        }
        CommandWord::Delete => {
            let task = tasks.delete_task(input)?;
            Ok(Reply::Deleted {
                task,
                remaining: tasks.len(),
            })
        }
        CommandWord::Todo | CommandWord::Deadline | CommandWord::Event => {
            let task_type = task_type_for(input.normalized());
            let task = tasks.add_task(task_type, input)?.clone();
            Ok(Reply::Added {
                task,
                total: tasks.len(),
            })
        }
        CommandWord::Bye | CommandWord::Goodbye => Ok(Reply::Goodbye),
        CommandWord::Help => Ok(Reply::Help),
    }
}

/// Normalize a raw line and run it.
pub fn process(line: &str, tasks: &mut TaskList) -> Result<Reply> {
    let input = Input::new(line);
    process_command(input.first_word(), &input, tasks)
}
