//! Integration tests for the `init` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_data_dir_and_database() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized vacancy in:"))
        .stdout(predicate::str::contains("Created data directory"))
        .stdout(predicate::str::contains("Created database"));

    assert!(env.data_dir.join("vacancy.db").exists());
}

#[test]
fn test_init_is_repeatable() {
    let env = TestEnv::new();

    env.command().arg("init").assert().success();
    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database already exists"));
}

#[test]
fn test_init_with_config_writes_template() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .arg("--with-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let config_path = env.data_dir.join("config.yaml");
    let contents = std::fs::read_to_string(&config_path).expect("config.yaml missing");
    assert!(contents.contains("total_rooms"));
}

#[test]
fn test_init_does_not_overwrite_config() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "total_rooms: 4\n").unwrap();

    env.command()
        .arg("init")
        .arg("--with-config")
        .assert()
        .success()
        .stderr(predicate::str::contains("not overwritten"));

    let contents = std::fs::read_to_string(env.data_dir.join("config.yaml")).unwrap();
    assert_eq!(contents, "total_rooms: 4\n");
}

#[test]
fn test_init_own_data_dir_flag_wins() {
    let env = TestEnv::new();
    let other = env.data_dir.with_file_name("elsewhere");

    env.command()
        .arg("init")
        .arg("--data-dir")
        .arg(&other)
        .assert()
        .success();

    assert!(other.join("vacancy.db").exists());
    assert!(!env.data_dir.exists());
}
