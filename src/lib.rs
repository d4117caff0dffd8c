//! Hachi library - command parsing and task list management for the chatbot

pub mod cli;
pub mod command;
pub mod session;
pub mod task;
pub mod ui;
