//! Integration tests for a full chat session
//!
//! Drive the chat loop with scripted input and check what the user sees
//! and what ends up in the task file.

use hachi::cli::chat::Chat;
use hachi::session::{SpacerLength, Storage};
use hachi::task::TaskList;
use hachi::ui::Ui;
use std::fs;
use std::io::Cursor;
use std::path::Path;

fn run_session(path: &Path, script: &str) -> (TaskList, String) {
    let mut storage = Storage::new(path);
    let tasks = storage.load().unwrap();
    let mut chat = Chat::new(tasks, storage, Ui::new(Vec::new(), SpacerLength::Medium));
    chat.run(Cursor::new(script.to_string()), false).unwrap();

    let tasks = chat.tasks().clone();
    let out = String::from_utf8(chat.into_ui().into_inner()).unwrap();
    (tasks, out)
}

#[test]
fn test_full_session() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("tasks.txt");

    let script = "\
list
todo read book
deadline Submit report /by Friday
event Trip /from Mon /to Wed
mark 2
delete 1
list
bye
";
    let (tasks, out) = run_session(&path, script);

    assert_eq!(tasks.len(), 2);
    assert!(out.contains("Your list is empty!"));
    assert!(out.contains("Added to list: [D] [ ] Submit report (by: Friday)"));
    assert!(out.contains("2: [D] [X] Submit report (by: Friday)"));
    assert!(out.contains("    1: [D] [X] Submit report\n    2: [E] [ ] Trip\n"));
    assert!(out.contains("Goodbye!"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "D | 1 | Submit report | Friday\nE | 0 | Trip | Mon | Wed\n"
    );
}

#[test]
fn test_tasks_survive_restart() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("tasks.txt");

    run_session(&path, "todo Water plants\nmark 1\nbye\n");
    let (tasks, out) = run_session(&path, "list\nbye\n");

    assert_eq!(tasks.len(), 1);
    assert!(out.contains("1: [T] [X] Water plants"));
}

#[test]
fn test_bad_commands_leave_file_alone() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("tasks.txt");

    let script = "\
todo keep me
foobar
deadline no date
event party /from Mon
mark 99
delete zero
todo
bye
";
    let (tasks, out) = run_session(&path, script);

    assert_eq!(tasks.len(), 1);
    assert!(out.contains("'foobar'"));
    assert!(out.contains("A deadline needs a date."));
    assert!(out.contains("An event needs a start and an end."));
    assert!(out.contains("There is no task number 99"));
    assert!(out.contains("'ZERO' is not a task number."));
    assert!(out.contains("The description of a task cannot be empty."));
    assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | keep me\n");
}

#[test]
fn test_lines_after_bye_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("tasks.txt");

    let (tasks, _) = run_session(&path, "goodbye\ntodo too late\n");
    assert!(tasks.is_empty());
}

#[test]
fn test_read_only_sessions_keep_unreadable_lines() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("tasks.txt");
    let backup = temp.path().join("tasks.txt.bak");
    fs::write(&path, "T | 0 | fine\nT | 2 | hand edited\n").unwrap();

    for _ in 0..2 {
        let (tasks, _) = run_session(&path, "list\nbye\n");
        assert_eq!(tasks.len(), 1);
    }

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T | 0 | fine\nT | 2 | hand edited\n"
    );
    if backup.exists() {
        assert!(fs::read_to_string(&backup).unwrap().contains("T | 2 | hand edited"));
    }

    // a later edit still writes the hand-edited line back
    run_session(&path, "todo more\nbye\n");
    assert!(fs::read_to_string(&path).unwrap().contains("T | 2 | hand edited"));
    assert!(fs::read_to_string(&backup).unwrap().contains("T | 2 | hand edited"));
}
