use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Sorry, I don't know what '{0}' means. Type 'help' to see what I can do.")]
    InvalidCommand(String),

    #[error("Your list is empty! Add a todo, deadline or event first.")]
    EmptyList,

    #[error("The description of a task cannot be empty.")]
    EmptyDescription,

    #[error("A deadline needs a date. Try 'deadline <task name> /by <by date>'.")]
    MissingByDate,

    #[error(
        "An event needs a start and an end. \
         Try 'event <task name> /from <start> /to <end>'."
    )]
    MissingEventDates,

    #[error("'{0}' is not a task number. Give me a number from your list.")]
    InvalidIndex(String),

    #[error("There is no task number {index}, your list has {len} task(s).")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Could not read saved task: {0}")]
    MalformedLine(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
