use assert_cmd::Command;
use predicates::prelude::*;

fn addonup() -> Command {
    Command::cargo_bin("addonup").unwrap()
}

#[test]
fn no_args_prints_usage() {
    addonup()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_prints_banner() {
    addonup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("addonup"));
}

#[test]
fn check_with_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    addonup()
        .current_dir(dir.path())
        .args(["check", "--config", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn init_writes_starter_config_once() {
    let dir = tempfile::tempdir().unwrap();

    addonup().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("config.json").is_file());

    // A second init must not clobber the edited config
    addonup()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn update_fails_before_any_network_when_install_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "page": "https://example.invalid/feed", "directories": ["ElvUI"] }"#,
    )
    .unwrap();

    // Install path points at a directory without Interface/AddOns, so the
    // pipeline aborts before touching the (invalid) feed URL.
    addonup()
        .current_dir(dir.path())
        .env("ADDONUP_INSTALL_PATH", dir.path())
        .args(["update", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AddOns directory not found"));
}
