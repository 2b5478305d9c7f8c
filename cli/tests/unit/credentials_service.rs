//! Unit tests for bearer token and project number resolution.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use agent_engine_cli::application::services::credentials::{access_token, project_number};
use agent_engine_cli::domain::{ApiError, CredentialSource, Secret};

use crate::mocks::{ScriptedRunner, err_output, ok_output};

#[test]
fn test_supplied_token_is_used_without_running_gcloud() {
    let runner = ScriptedRunner::default();
    let token = access_token(&CredentialSource::AccessToken(Secret::new("ya29.x")), &runner)
        .expect("token");
    assert_eq!(token.expose(), "ya29.x");
    assert!(runner.calls().is_empty());
}

#[test]
fn test_ambient_credentials_come_from_gcloud() {
    let runner = ScriptedRunner::with(vec![ok_output(b"ya29.ambient\n")]);
    let token = access_token(&CredentialSource::Ambient, &runner).expect("token");
    assert_eq!(token.expose(), "ya29.ambient");
    assert_eq!(
        runner.calls(),
        vec!["gcloud auth application-default print-access-token".to_string()]
    );
}

#[test]
fn test_ambient_failure_is_an_auth_error() {
    let runner = ScriptedRunner::with(vec![err_output(b"Reauthentication required")]);
    let err = access_token(&CredentialSource::Ambient, &runner).unwrap_err();
    let api = err.downcast_ref::<ApiError>().expect("ApiError");
    assert!(matches!(api, ApiError::Auth(msg) if msg.contains("Reauthentication required")));
}

#[test]
fn test_missing_gcloud_is_an_auth_error() {
    let runner = ScriptedRunner::default();
    let err = access_token(&CredentialSource::Ambient, &runner).unwrap_err();
    assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Auth(_))));
}

#[test]
fn test_project_number_is_trimmed() {
    let runner = ScriptedRunner::with(vec![ok_output(b"  1234567890\n")]);
    assert_eq!(project_number(&runner, "p1").expect("number"), "1234567890");
}

#[test]
fn test_empty_project_number_is_an_error() {
    let runner = ScriptedRunner::with(vec![ok_output(b"\n")]);
    assert!(project_number(&runner, "p1").is_err());
}
