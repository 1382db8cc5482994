//! Config subcommand integration tests
//!
//! Each test points XDG_CONFIG_HOME at its own temp dir so nothing leaks
//! into the caller's real configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn alsa_rec_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("alsa-rec").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn config_path_points_into_config_home() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alsa-rec"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_list_without_file_shows_unset_keys() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("device"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "set", "rate", "48000"])
        .assert()
        .success();
    alsa_rec_bin(&home)
        .args(["config", "get", "rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("48000"));
}

#[test]
fn config_init_then_reinit_fails() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home).args(["config", "init"]).assert().success();
    alsa_rec_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_channels() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "set", "channels", "33"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 through 32"));
}

#[test]
fn config_set_invalid_file_type() {
    let home = TempDir::new().unwrap();
    alsa_rec_bin(&home)
        .args(["config", "set", "file_type", "flac"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("voc, wav, raw, au"));
}
