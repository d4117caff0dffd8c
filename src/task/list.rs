//! The ordered task list and the operations commands apply to it

use std::fmt;
use tracing::debug;

use super::error::{Result, TaskError};
use super::model::{Task, TaskType};
use crate::command::input::{Input, BY_MARKER, FROM_MARKER, TO_MARKER};

/// One row of `list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEntry<'a> {
    /// 1-based position
    pub index: usize,
    pub code: &'static str,
    pub icon: char,
    pub name: &'a str,
}

impl fmt::Display for TaskEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] [{}] {}", self.index, self.code, self.icon, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from previously saved tasks, keeping their order
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Task at a 1-based position
    pub fn get(&self, number: usize) -> Option<&Task> {
        number.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Build a task of the given type from the command line and append it.
    pub fn add_task(&mut self, task_type: TaskType, input: &Input<'_>) -> Result<&Task> {
        let task = match task_type {
            TaskType::Todo => parse_todo(input)?,
            TaskType::Deadline => parse_deadline(input)?,
            TaskType::Event => parse_event(input)?,
        };
        debug!("Adding task {:?}", task);
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Entries for every task in display order.
    ///
    /// The iterator borrows the list and can be cloned to walk it again.
    pub fn retrieve_list(
        &self,
    ) -> Result<impl Iterator<Item = TaskEntry<'_>> + Clone + '_> {
        if self.tasks.is_empty() {
            return Err(TaskError::EmptyList);
        }
        Ok(self.tasks.iter().enumerate().map(|(i, task)| TaskEntry {
            index: i + 1,
            code: task.code(),
            icon: task.status_icon(),
            name: task.name(),
        }))
    }

    /// Handle `mark <n>` and `unmark <n>`.
    ///
    /// Returns the 1-based task number along with the updated task.
    pub fn mark_or_unmark(&mut self, input: &Input<'_>) -> Result<(usize, &Task)> {
        let number = input.task_number()?;
        let position = self.position(number)?;
        let complete = !input.normalized().contains("UNMARK");

        debug!("Setting task {} complete={}", number, complete);
        self.tasks[position].set_complete(complete);
        Ok((number, &self.tasks[position]))
    }

    /// Handle `delete <n>`, returning the removed task
    pub fn delete_task(&mut self, input: &Input<'_>) -> Result<Task> {
        let number = input.task_number()?;
        let position = self.position(number)?;
        debug!("Deleting task {}", number);
        Ok(self.tasks.remove(position))
    }

    fn position(&self, number: usize) -> Result<usize> {
        if number == 0 || number > self.tasks.len() {
            return Err(TaskError::IndexOutOfBounds {
                index: number,
                len: self.tasks.len(),
            });
        }
        Ok(number - 1)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn name_start(task_type: TaskType) -> usize {
    task_type.keyword().len()
}

fn parse_todo(input: &Input<'_>) -> Result<Task> {
    let name = input
        .tail(name_start(TaskType::Todo))
        .ok_or(TaskError::EmptyDescription)?;
    Task::todo(name)
}

fn parse_deadline(input: &Input<'_>) -> Result<Task> {
    let start = name_start(TaskType::Deadline);
    let Some(by) = input.find_marker(BY_MARKER, start) else {
        return Err(description_or(input, start, TaskError::MissingByDate));
    };

    let name = input.slice(start, by).unwrap_or_default();
    let by_date = input.tail(by + BY_MARKER.len()).unwrap_or_default();
    if name.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    if by_date.is_empty() {
        return Err(TaskError::MissingByDate);
    }
    Task::deadline(name, by_date)
}

fn parse_event(input: &Input<'_>) -> Result<Task> {
    let start = name_start(TaskType::Event);
    let from = input.find_marker(FROM_MARKER, start);
    let to = from.and_then(|from| input.find_marker(TO_MARKER, from + FROM_MARKER.len()));
    let (Some(from), Some(to)) = (from, to) else {
        return Err(description_or(input, start, TaskError::MissingEventDates));
    };

    let name = input.slice(start, from).unwrap_or_default();
    let from_date = input.slice(from + FROM_MARKER.len(), to).unwrap_or_default();
    let to_date = input.tail(to + TO_MARKER.len()).unwrap_or_default();
    if name.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    if from_date.is_empty() || to_date.is_empty() {
        return Err(TaskError::MissingEventDates);
    }
    Task::event(name, from_date, to_date)
}

/// A bare `deadline` or `event` is missing its description before anything else.
fn description_or(input: &Input<'_>, start: usize, missing: TaskError) -> TaskError {
    match input.tail(start) {
        Some(rest) if !rest.is_empty() => missing,
        _ => TaskError::EmptyDescription,
    }
}
