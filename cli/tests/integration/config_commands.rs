//! Integration tests for configuration loading and validation through the
//! binary: `.env` layering, exit codes, JSON errors and artifact checks.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const EXIT_CONFIG: i32 = 78;

const DEPLOY_ENV: &str = "\
GOOGLE_CLOUD_PROJECT=p1
GOOGLE_CLOUD_LOCATION=us-central1
AGENT_NAME=fromfile
GOOGLE_CLOUD_STORAGE_BUCKET=b1
OAUTH_CLIENT_ID=client-123
OAUTH_CLIENT_SECRET=super-secret
GCP_ACCESS_TOKEN=test-token
";

/// Command running in `dir` with an otherwise empty environment.
fn agent_engine(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agent-engine"));
    cmd.env_clear().env("NO_COLOR", "1").current_dir(dir);
    cmd
}

fn workdir(env_file: &str, files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join(".env"), env_file).expect("write .env");
    for name in files {
        std::fs::write(dir.path().join(name), b"PK\x03\x04").expect("write file");
    }
    dir
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON object")
}

#[test]
fn test_deploy_without_config_exits_78_naming_every_variable() {
    let dir = TempDir::new().expect("tempdir");
    agent_engine(dir.path())
        .arg("deploy")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("GOOGLE_CLOUD_PROJECT"))
        .stderr(predicate::str::contains("GOOGLE_CLOUD_LOCATION"))
        .stderr(predicate::str::contains("AGENT_NAME"))
        .stderr(predicate::str::contains("GOOGLE_CLOUD_STORAGE_BUCKET"));
}

#[test]
fn test_json_error_object_for_config_failure() {
    let dir = TempDir::new().expect("tempdir");
    let assert = agent_engine(dir.path())
        .args(["--json", "register"])
        .assert()
        .code(EXIT_CONFIG);
    let v = stdout_json(assert.get_output());
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "config_error");
    assert!(v["message"].as_str().expect("message").contains("AGENTSPACE_APP_ID"));
}

#[test]
fn test_empty_process_value_counts_as_missing() {
    let dir = TempDir::new().expect("tempdir");
    agent_engine(dir.path())
        .args(["check", "local-run"])
        .env("GOOGLE_CLOUD_PROJECT", "")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("GOOGLE_CLOUD_PROJECT"));
}

#[test]
fn test_check_local_run_needs_only_project() {
    let dir = TempDir::new().expect("tempdir");
    agent_engine(dir.path())
        .args(["check", "local-run"])
        .env("GOOGLE_CLOUD_PROJECT", "p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("p1"));
}

#[test]
fn test_check_deploy_reads_env_file_and_masks_secrets() {
    let dir = workdir(DEPLOY_ENV, &["demo-0.1.0-py3-none-any.whl"]);
    agent_engine(dir.path())
        .args(["check", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fromfile"))
        .stdout(predicate::str::contains("demo-0.1.0-py3-none-any.whl"))
        .stdout(predicate::str::contains("super-secret").not())
        .stdout(predicate::str::contains("client-123").not());
}

#[test]
fn test_process_environment_overrides_env_file() {
    let dir = workdir(DEPLOY_ENV, &[]);
    let assert = agent_engine(dir.path())
        .args(["--json", "check", "deploy"])
        .env("AGENT_NAME", "fromprocess")
        .assert()
        .success();
    let v = stdout_json(assert.get_output());
    assert_eq!(v["config"]["AGENT_NAME"], "fromprocess");
    assert_eq!(v["config"]["AGENT_DISPLAY_NAME"], "ADK Agent");
    assert_eq!(v["artifact"]["found"], false);
}

#[test]
fn test_empty_process_value_does_not_hide_env_file_value() {
    let dir = workdir(DEPLOY_ENV, &[]);
    let assert = agent_engine(dir.path())
        .args(["--json", "check", "deploy"])
        .env("AGENT_NAME", "")
        .assert()
        .success();
    assert_eq!(stdout_json(assert.get_output())["config"]["AGENT_NAME"], "fromfile");
}

#[test]
fn test_env_file_flag_selects_another_file() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("prod.env"), "GOOGLE_CLOUD_PROJECT=prod-project\n")
        .expect("write");
    agent_engine(dir.path())
        .args(["--env-file", "prod.env", "check", "local-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod-project"));
}

#[test]
fn test_malformed_env_file_is_a_config_error() {
    let dir = workdir("this is not an assignment\n", &[]);
    agent_engine(dir.path())
        .args(["check", "local-run"])
        .env("GOOGLE_CLOUD_PROJECT", "p1")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains(".env"));
}

#[test]
fn test_invalid_app_location_is_rejected_by_name() {
    let dir = TempDir::new().expect("tempdir");
    agent_engine(dir.path())
        .args(["check", "register"])
        .envs([
            ("GOOGLE_CLOUD_PROJECT", "p1"),
            ("GOOGLE_CLOUD_LOCATION", "us-central1"),
            ("AGENT_NAME", "demo"),
            ("AGENT_ENGINE_ID", "123"),
            ("AGENTSPACE_APP_ID", "app"),
            ("AGENTSPACE_APP_LOCATION", "asia"),
        ])
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("AGENTSPACE_APP_LOCATION"))
        .stderr(predicate::str::contains("asia"));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = workdir(DEPLOY_ENV, &[]);
    agent_engine(dir.path())
        .args(["check", "deploy"])
        .env("LOG_LEVEL", "VERBOSE")
        .assert()
        .code(EXIT_CONFIG)
        .stderr(predicate::str::contains("LOG_LEVEL"));
}

#[test]
fn test_deploy_with_two_artifacts_fails_before_any_network_call() {
    let dir = workdir(
        DEPLOY_ENV,
        &["a-0.1.0-py3-none-any.whl", "b-0.2.0-py3-none-any.whl"],
    );
    agent_engine(dir.path())
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a-0.1.0-py3-none-any.whl"))
        .stderr(predicate::str::contains("b-0.2.0-py3-none-any.whl"));
    assert!(dir.path().join("a-0.1.0-py3-none-any.whl").exists());
}

#[test]
fn test_deploy_without_artifact_reports_precondition_in_json() {
    let dir = workdir(DEPLOY_ENV, &[]);
    let assert = agent_engine(dir.path())
        .args(["--json", "deploy"])
        .assert()
        .code(1);
    assert_eq!(stdout_json(assert.get_output())["code"], "precondition_failed");
}
