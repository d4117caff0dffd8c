//! Hachi - a command-line chatbot that keeps track of your tasks

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use hachi::cli::{self, Cli, Commands};
use hachi::session::Config;

fn main() -> Result<()> {
    if std::env::var("HACHI_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("hachi=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        // Completion needs neither config nor the task file
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "hachi", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::List(args)) => {
            let config = Config::load()?;
            cli::list::run(&config, cli.file, args)
        }
        None => {
            let config = Config::load()?;
            cli::chat::run(&config, cli.file)
        }
    }
}
