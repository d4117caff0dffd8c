//! Task data model

use serde::Serialize;
use std::fmt;

use super::error::{Result, TaskError};

/// Field separator used by the saved task file.
pub const FIELD_SEPARATOR: &str = " | ";

/// What kind of task this is, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter code shown in the list
    pub fn code(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
        }
    }
}

/// Which task constructor a creation command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

impl TaskType {
    /// The command keyword that creates this type
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Deadline => "DEADLINE",
            Self::Event => "EVENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    name: String,
    is_complete: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    fn new(name: &str, kind: TaskKind) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        Ok(Self {
            name: name.to_string(),
            is_complete: false,
            kind,
        })
    }

    pub fn todo(name: &str) -> Result<Self> {
        Self::new(name, TaskKind::Todo)
    }

    pub fn deadline(name: &str, by: &str) -> Result<Self> {
        Self::new(
            name,
            TaskKind::Deadline {
                by: by.trim().to_string(),
            },
        )
    }

    pub fn event(name: &str, from: &str, to: &str) -> Result<Self> {
        Self::new(
            name,
            TaskKind::Event {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.is_complete = complete;
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn status_icon(&self) -> char {
        if self.is_complete {
            'X'
        } else {
            ' '
        }
    }

    /// Date suffix for deadlines and events, e.g. `(by: Friday)`
    pub fn dates(&self) -> Option<String> {
        match &self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(format!("(by: {})", by)),
            TaskKind::Event { from, to } => Some(format!("(from: {} to: {})", from, to)),
        }
    }

    /// Encode as one line of the saved task file.
    ///
    /// `|` and `\` inside a field are backslash-escaped so the separator
    /// only ever appears between fields.
    pub fn to_line(&self) -> String {
        let done = if self.is_complete { "1" } else { "0" };
        let mut fields = vec![self.code().to_string(), done.to_string(), escape(&self.name)];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(escape(by)),
            TaskKind::Event { from, to } => {
                fields.push(escape(from));
                fields.push(escape(to));
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    /// Decode one line written by [`Task::to_line`].
    pub fn from_line(line: &str) -> Result<Self> {
        let malformed = || TaskError::MalformedLine(line.to_string());

        let fields = split_fields(line);
        let [code, done, rest @ ..] = fields.as_slice() else {
            return Err(malformed());
        };
        let is_complete = match done.trim() {
            "1" => true,
            "0" => false,
            _ => return Err(malformed()),
        };

        let task = match (code.trim(), rest) {
            ("T", [name]) => Self::todo(name),
            ("D", [name, by]) => Self::deadline(name, by),
            ("E", [name, from, to]) => Self::event(name, from, to),
            _ => return Err(malformed()),
        };

        let mut task = task.map_err(|_| malformed())?;
        task.set_complete(is_complete);
        Ok(task)
    }
}

fn escape(field: &str) -> String {
    field.replace('\\', "\\\\").replace('|', "\\|")
}

/// Split a saved line on unescaped separators, unescaping each field
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => current.push(chars.next().unwrap_or('\\')),
            ' ' if chars.as_str().starts_with("| ") => {
                chars.nth(1);
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.code(), self.status_icon(), self.name)
    }
}
