//! Unit tests for Agentspace authorization resources.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use agent_engine_cli::application::services::authorization::{
    AuthorizationDeleteOutcome, create_authorization, delete_authorization,
};
use agent_engine_cli::domain::{
    CreateAuthorizationConfig, DeleteAuthorizationConfig, ModeConfig, validate,
};

use crate::helpers::env;
use crate::mocks::{MockConfirmer, RecordingAuthorizations, RecordingReporter};

fn create_config(extra: &[(&str, &str)]) -> CreateAuthorizationConfig {
    let mut pairs = vec![
        ("GOOGLE_CLOUD_PROJECT", "p1"),
        ("GCP_ACCESS_TOKEN", "token"),
        ("AUTH_ID", "my-auth"),
        ("OAUTH_CLIENT_ID", "cid"),
        ("OAUTH_CLIENT_SECRET", "shh"),
        ("OAUTH_AUTH_URI", "https://accounts.google.com/o/oauth2/v2/auth"),
        ("OAUTH_TOKEN_URI", "https://oauth2.googleapis.com/token"),
    ];
    pairs.extend_from_slice(extra);
    validate::<CreateAuthorizationConfig>(&env(&pairs)).expect("valid config")
}

fn delete_config(extra: &[(&str, &str)]) -> DeleteAuthorizationConfig {
    let mut pairs = vec![
        ("GOOGLE_CLOUD_PROJECT", "p1"),
        ("GCP_ACCESS_TOKEN", "token"),
        ("AUTH_ID", "my-auth"),
    ];
    pairs.extend_from_slice(extra);
    validate::<DeleteAuthorizationConfig>(&env(&pairs)).expect("valid config")
}

#[test]
fn test_create_posts_to_collection_with_authorization_id() {
    let config = create_config(&[("OAUTH_SCOPES", "openid email")]);
    let api = RecordingAuthorizations::default();

    create_authorization(&config, &api, &RecordingReporter::default()).expect("create");

    let created = api.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    let (url, body) = &created[0];
    assert_eq!(
        url,
        "https://discoveryengine.googleapis.com/v1alpha/projects/p1/locations/global/authorizations?authorizationId=my-auth"
    );
    assert_eq!(body.name, "projects/p1/locations/global/authorizations/my-auth");
    assert!(
        body.server_side_oauth2
            .authorization_uri
            .contains("response_type=code")
    );
    assert!(
        body.server_side_oauth2
            .authorization_uri
            .contains("scope=openid%20email")
    );
}

#[test]
fn test_create_in_regional_location_warns() {
    let config = create_config(&[("AUTH_LOCATION", "eu")]);
    let reporter = RecordingReporter::default();

    create_authorization(&config, &RecordingAuthorizations::default(), &reporter)
        .expect("create");

    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_delete_confirmed() {
    let config = delete_config(&[]);
    let api = RecordingAuthorizations::default();
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().times(1).returning(|_| Ok(true));

    let outcome =
        delete_authorization(&config, &api, &confirmer, &RecordingReporter::default())
            .expect("delete");

    assert_eq!(outcome, AuthorizationDeleteOutcome::Deleted);
    assert_eq!(
        api.deleted.lock().unwrap().clone(),
        vec![
            "https://discoveryengine.googleapis.com/v1alpha/projects/p1/locations/global/authorizations/my-auth"
                .to_string()
        ]
    );
}

#[test]
fn test_delete_declined_issues_no_call() {
    let config = delete_config(&[]);
    let api = RecordingAuthorizations::default();
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().times(1).returning(|_| Ok(false));

    let outcome =
        delete_authorization(&config, &api, &confirmer, &RecordingReporter::default())
            .expect("declining is not an error");

    assert_eq!(outcome, AuthorizationDeleteOutcome::Cancelled);
    assert!(api.deleted.lock().unwrap().is_empty());
}

#[test]
fn test_config_summary_masks_client_secret() {
    let config = create_config(&[]);
    let summary = config.summary();
    assert!(summary.iter().all(|(_, v)| v != "shh"));
}
