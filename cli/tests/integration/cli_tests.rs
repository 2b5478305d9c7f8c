//! Integration tests for the CLI surface: help, version and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn agent_engine() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agent-engine"));
    cmd.env_clear().env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    agent_engine().assert().code(2).stderr(predicate::str::contains(
        "Deploy, register and exercise ADK agents",
    ));
}

#[test]
fn test_cli_help_lists_every_command() {
    let assert = agent_engine().arg("--help").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for command in [
        "deploy",
        "delete",
        "register",
        "update-registration",
        "unregister",
        "list",
        "remote-test",
        "create-auth",
        "delete-auth",
        "check",
    ] {
        assert!(out.contains(command), "help is missing `{command}`:\n{out}");
    }
}

#[test]
fn test_cli_version_flag_shows_version() {
    agent_engine()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent-engine"));
}

#[test]
fn test_check_rejects_unknown_mode() {
    agent_engine()
        .args(["check", "publish"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'publish'"));
}

#[test]
fn test_unknown_command_fails() {
    agent_engine().arg("launch").assert().failure();
}
