//! Integration tests for config wiring
//!
//! These tests verify that config.toml settings reach the code that uses
//! them: the task file location and the spacer width.

use hachi::cli::open_storage;
use hachi::session::{get_app_dir, save_config, Config, SpacerLength, TASKS_FILE_NAME};
use hachi::ui::Ui;
use serial_test::serial;
use std::path::PathBuf;

fn setup_temp_home() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", temp.path());
    temp
}

#[test]
#[serial]
fn test_default_task_file_lives_in_app_dir() {
    let _temp = setup_temp_home();

    let config = Config::load().unwrap();
    let storage = open_storage(&config, None).unwrap();
    assert_eq!(storage.path(), get_app_dir().unwrap().join(TASKS_FILE_NAME));
}

#[test]
#[serial]
fn test_data_file_setting_is_used() {
    let temp = setup_temp_home();

    let config = Config {
        data_file: Some("~/my-tasks.txt".to_string()),
        ..Config::default()
    };
    save_config(&config).unwrap();

    let loaded = Config::load().unwrap();
    let mut storage = open_storage(&loaded, None).unwrap();
    assert_eq!(storage.path(), temp.path().join("my-tasks.txt"));

    storage.load().unwrap();
    assert!(temp.path().join("my-tasks.txt").exists());
}

#[test]
#[serial]
fn test_file_flag_beats_config() {
    let _temp = setup_temp_home();

    let config = Config {
        data_file: Some("~/my-tasks.txt".to_string()),
        ..Config::default()
    };
    let flag = PathBuf::from("/tmp/from-flag.txt");
    let storage = open_storage(&config, Some(flag.clone())).unwrap();
    assert_eq!(storage.path(), flag);
}

#[test]
#[serial]
fn test_spacer_setting_reaches_ui() {
    let _temp = setup_temp_home();

    let mut config = Config::default();
    config.ui.spacer = SpacerLength::Large;
    save_config(&config).unwrap();

    let loaded = Config::load().unwrap();
    let mut ui = Ui::new(Vec::new(), loaded.ui.spacer);
    ui.spacer(false).unwrap();
    let out = String::from_utf8(ui.into_inner()).unwrap();
    assert_eq!(out.trim_end().len(), 60);
}
