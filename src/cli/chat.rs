//! Interactive chat loop: read a line, run it, print the reply, save

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::command::{process_command, Input};
use crate::session::{Config, Storage};
use crate::task::TaskList;
use crate::ui::Ui;

pub struct Chat<W: Write> {
    tasks: TaskList,
    storage: Storage,
    ui: Ui<W>,
    /// Set while the list holds changes the last save attempt did not write
    needs_save: bool,
}

impl<W: Write> Chat<W> {
    pub fn new(tasks: TaskList, storage: Storage, ui: Ui<W>) -> Self {
        Self {
            tasks,
            storage,
            ui,
            needs_save: false,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn into_ui(self) -> Ui<W> {
        self.ui
    }

    /// Greet, then handle lines until `bye` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R, show_help: bool) -> io::Result<()> {
        self.ui.greeting()?;
        if show_help {
            self.ui.help()?;
        }
        self.ui.flush()?;

        let mut said_goodbye = false;
        for line in input.lines() {
            if self.handle_line(&line?)? {
                said_goodbye = true;
                break;
            }
        }

        if !said_goodbye {
            debug!("Input closed without bye");
            self.ui.goodbye()?;
            self.ui.spacer(true)?;
        }
        if self.needs_save {
            debug!("Retrying failed save before exit");
            self.save()?;
        }
        self.ui.flush()
    }

    /// Run one line. Returns true when the session should end.
    ///
    /// Command errors are printed and never stop the session; only a
    /// failure to write to the console does.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let input = Input::new(line);
        if input.raw().is_empty() {
            return Ok(false);
        }

        let stop = match process_command(input.first_word(), &input, &mut self.tasks) {
            Ok(reply) => {
                self.ui.reply(&reply)?;
                if reply.changes_tasks() {
                    self.save()?;
                }
                reply.is_goodbye()
            }
            Err(e) => {
                debug!("Command {:?} failed: {:?}", input.first_word(), e);
                self.ui.error(&e)?;
                false
            }
        };

        self.ui.spacer(true)?;
        self.ui.flush()?;
        Ok(stop)
    }

    /// Save the list. A failed save is reported, the in-memory list is kept
    /// and the save is retried on exit.
    fn save(&mut self) -> io::Result<()> {
        match self.storage.save(&self.tasks) {
            Ok(()) => self.needs_save = false,
            Err(e) => {
                warn!("Failed to save tasks: {:#}", e);
                self.needs_save = true;
                self.ui.save_failed(&format!("{:#}", e))?;
            }
        }
        Ok(())
    }
}

pub fn run(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let mut storage = super::open_storage(config, file)?;
    let tasks = storage.load()?;
    info!("Loaded {} task(s) from {:?}", tasks.len(), storage.path());

    let ui = Ui::new(io::stdout(), config.ui.spacer);
    let mut chat = Chat::new(tasks, storage, ui);
    chat.run(io::stdin().lock(), config.ui.show_help_on_start)?;
    Ok(())
}
