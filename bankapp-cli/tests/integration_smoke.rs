//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("bankapp").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("bankapp").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("BANKAPP_DATABASE"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("bankapp").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.db");

    let mut cmd = Command::cargo_bin("bankapp").unwrap();
    cmd.arg("migrate").arg("--database").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(path.exists());

    // Second run is a no-op
    let mut again = Command::cargo_bin("bankapp").unwrap();
    again.arg("migrate").arg("--database").arg(&path);
    again.assert().success();
}
