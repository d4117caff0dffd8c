//! Task management module
//!
//! - Task model (todo, deadline, event) and its saved-line encoding
//! - The ordered task list and the operations commands apply to it
//! - Saved task file parsing

pub mod error;
pub mod list;
pub mod model;
pub mod parser;

pub use error::{Result, TaskError};
pub use list::{TaskEntry, TaskList};
pub use model::{Task, TaskKind, TaskType};
pub use parser::{SkippedLine, TasksFile};
