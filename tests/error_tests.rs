//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mixdeck_bin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mixdeck").unwrap();
    cmd.env("MIXDECK_CONFIG", dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn export_unknown_recording() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["export", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Recording 42 not found"));
}

#[test]
fn play_unknown_recording() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["play", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn delete_unknown_recording() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_recording_id() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["export", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn invalid_format() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["export", "1", "--format", "ogg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ogg"));
}

#[test]
fn invalid_quality() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["export", "1", "--quality", "128"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("128"));
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown_key"));
}

#[test]
fn config_set_invalid_boolean() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["config", "set", "notify", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true").or(predicate::str::contains("boolean")));
}

#[test]
fn config_set_step_out_of_range() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["config", "set", "simulation.step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("simulation.step"));
}

#[test]
fn config_list_with_no_file() {
    let dir = TempDir::new().unwrap();
    mixdeck_bin(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn broken_config_file_is_ignored_with_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "notify = [[[").unwrap();

    mixdeck_bin(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep House Session #4"))
        .stderr(predicate::str::contains("Ignoring config file"));
}
