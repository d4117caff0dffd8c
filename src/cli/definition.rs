//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "hachi")]
#[command(about = "Hachi - a chatbot that keeps track of your todos, deadlines and events")]
#[command(version)]
pub struct Cli {
    /// Task file to load and save (overrides `data_file` in config.toml)
    #[arg(short, long, global = true, env = "HACHI_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print saved tasks and exit
    List(ListArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
