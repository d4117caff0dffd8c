//! Command-line parsing for the chat loop

pub mod input;
pub mod parser;

pub use input::Input;
pub use parser::{process, process_command, CommandWord, Reply};
