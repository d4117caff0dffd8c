//! Console rendering for the chat loop

use std::fmt;
use std::io::{self, Write};

use crate::command::Reply;
use crate::session::SpacerLength;
use crate::task::Task;

const INDENT: &str = "    ";

const LOGO: &str = "\
._. ._.  ._____.  ._____.  ._. ._.  ._.
| | | |  | ._. |  |  ___|  | | | |  | |
| |_| |  | |_| |  | |      | |_| |  | |
| ._. |  | ._. |  | |___   |  _  |  | |
|_| |_|  |_| |_|  |_____|  |_| |_|  |_|
";

fn commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("list", "retrieve your current list of tasks"),
        ("mark <#>", "mark task number # as complete"),
        ("unmark <#>", "mark task number # as incomplete"),
        ("delete <#>", "remove task number # from the list"),
        ("todo <task name>", "create a to-do"),
        ("deadline <task name> /by <by date>", "create a task with a deadline"),
        (
            "event <task name> /from <start> /to <end>",
            "create an event with a start and end date",
        ),
        ("bye", "stop chatting :("),
    ]
}

pub struct Ui<W: Write> {
    out: W,
    spacer: SpacerLength,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W, spacer: SpacerLength) -> Self {
        Self { out, spacer }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn spacer(&mut self, indented: bool) -> io::Result<()> {
        let indent = if indented { INDENT } else { "" };
        writeln!(self.out, "{}{}", indent, "~".repeat(self.spacer.width()))
    }

    pub fn greeting(&mut self) -> io::Result<()> {
        self.spacer(false)?;
        writeln!(
            self.out,
            "Hey, Hachi Here!\n{}How can I assist you today?\n",
            LOGO
        )?;
        self.spacer(false)
    }

    pub fn help(&mut self) -> io::Result<()> {
        self.spacer(true)?;
        writeln!(self.out, "You can use the following commands:")?;
        for (usage, description) in commands() {
            writeln!(self.out, "{}'{}' to {},", INDENT, usage, description)?;
        }
        writeln!(self.out, "{}And if you need to see this again, type 'help'!", INDENT)?;
        self.spacer(true)
    }

    pub fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}Goodbye! Hope you have a marvelous day.", INDENT)
    }

    pub fn reply(&mut self, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Added { task, total } => {
                writeln!(self.out, "{}Added to list: {}", INDENT, describe(task))?;
                writeln!(self.out, "{}Now you have {} task(s) in the list.", INDENT, total)
            }
            Reply::Listed(lines) => {
                self.spacer(true)?;
                writeln!(self.out, "{}The following are in your list:", INDENT)?;
                for line in lines {
                    writeln!(self.out, "{}{}", INDENT, line)?;
                }
                Ok(())
            }
            Reply::Updated { number, task } => {
                writeln!(self.out, "{}Sure, I've done as you requested:", INDENT)?;
                writeln!(self.out, "{}{}: {}", INDENT, number, describe(task))
            }
            Reply::Deleted { task, remaining } => {
                writeln!(self.out, "{}Alright, I've removed this task:", INDENT)?;
                writeln!(self.out, "{}{}", INDENT, describe(task))?;
                writeln!(self.out, "{}Now you have {} task(s) in the list.", INDENT, remaining)
            }
            Reply::Help => self.help(),
            Reply::Goodbye => self.goodbye(),
        }
    }

    pub fn error(&mut self, err: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}{}", INDENT, err)
    }

    pub fn save_failed(&mut self, err: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}There was an error saving files: {}", INDENT, err)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// `[D] [ ] name (by: date)` style line for confirmations
fn describe(task: &Task) -> String {
    match task.dates() {
        Some(dates) => format!("{} {}", task, dates),
        None => task.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskError;

    fn render(spacer: SpacerLength, f: impl FnOnce(&mut Ui<Vec<u8>>) -> io::Result<()>) -> String {
        let mut ui = Ui::new(Vec::new(), spacer);
        f(&mut ui).unwrap();
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn test_spacer_widths() {
        assert_eq!(render(SpacerLength::Small, |ui| ui.spacer(false)), format!("{}\n", "~".repeat(20)));
        assert_eq!(
            render(SpacerLength::Large, |ui| ui.spacer(true)),
            format!("    {}\n", "~".repeat(60))
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let out = render(SpacerLength::Medium, |ui| ui.reply(&Reply::Help));
        for word in ["list", "mark", "unmark", "delete", "todo", "deadline", "event", "bye", "help"] {
            assert!(out.contains(&format!("'{}", word)), "help is missing {}", word);
        }
    }

    #[test]
    fn test_added_shows_dates() -> crate::task::Result<()> {
        let task = Task::event("Trip", "Mon", "Wed")?;
        let out = render(SpacerLength::Medium, |ui| {
            ui.reply(&Reply::Added { task, total: 3 })
        });
        assert!(out.contains("Added to list: [E] [ ] Trip (from: Mon to: Wed)"));
        assert!(out.contains("Now you have 3 task(s) in the list."));
        Ok(())
    }

    #[test]
    fn test_listed_is_indented() {
        let lines = vec!["1: [T] [X] read".to_string(), "2: [T] [ ] write".to_string()];
        let out = render(SpacerLength::Medium, |ui| ui.reply(&Reply::Listed(lines)));
        assert!(out.contains("    1: [T] [X] read\n    2: [T] [ ] write\n"));
    }

    #[test]
    fn test_error_message() {
        let out = render(SpacerLength::Medium, |ui| ui.error(&TaskError::EmptyList));
        assert_eq!(out, format!("    {}\n", TaskError::EmptyList));
    }

    #[test]
    fn test_greeting_has_logo() {
        let out = render(SpacerLength::Medium, |ui| ui.greeting());
        assert!(out.contains("Hey, Hachi Here!"));
        assert!(out.contains("|_| |_|"));
    }
}
