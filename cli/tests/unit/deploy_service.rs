//! Unit tests for the deploy service (create-or-update of the agent engine).

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::Read as _;

use agent_engine_cli::application::services::deploy::{deploy, ensure_staging_bucket};
use agent_engine_cli::domain::PreconditionError;
use agent_engine_cli::domain::deploy::DeployAction;

use crate::helpers::{BUCKET, deploy_config};
use crate::mocks::{EngineCall, MemoryArtifacts, MemoryStaging, RecordingEngines, RecordingReporter};

const WHEEL: &str = "demo_agent-0.1.0-py3-none-any.whl";

#[test]
fn test_deploy_without_engine_id_creates_with_default_display_name() {
    let config = deploy_config(&[]);
    let artifacts = MemoryArtifacts::with(&[WHEEL, "README.md"]);
    let staging = MemoryStaging::default();
    let engines = RecordingEngines::default();

    let outcome = deploy(&config, &artifacts, &staging, &engines, &RecordingReporter::default())
        .expect("deploy");

    let calls = engines.calls();
    assert_eq!(calls.len(), 1);
    let EngineCall::Create(parent, body) = &calls[0] else {
        panic!("expected create, got {calls:?}");
    };
    assert_eq!(parent.project, "p1");
    assert_eq!(parent.location, "us-central1");
    assert_eq!(body.display_name, "ADK Agent");
    assert!(matches!(outcome.action, DeployAction::Create(_)));
    assert_eq!(
        outcome.engine.to_string(),
        "projects/p1/locations/us-central1/reasoningEngines/456"
    );
    assert_eq!(outcome.artifact, WHEEL);
}

#[test]
fn test_deploy_with_engine_id_updates_addressed_engine() {
    let config = deploy_config(&[("AGENT_ENGINE_ID", "123")]);
    let artifacts = MemoryArtifacts::with(&[WHEEL]);
    let engines = RecordingEngines::default();

    let outcome = deploy(
        &config,
        &artifacts,
        &MemoryStaging::default(),
        &engines,
        &RecordingReporter::default(),
    )
    .expect("deploy");

    let calls = engines.calls();
    assert_eq!(calls.len(), 1);
    let EngineCall::Update(name, _) = &calls[0] else {
        panic!("expected update, got {calls:?}");
    };
    assert_eq!(
        name.to_string(),
        "projects/p1/locations/us-central1/reasoningEngines/123"
    );
    assert!(outcome.action.is_update());
}

#[test]
fn test_deploy_with_two_artifacts_makes_no_remote_calls() {
    let config = deploy_config(&[]);
    let artifacts = MemoryArtifacts::with(&["a-0.1-py3-none-any.whl", "b-0.1-py3-none-any.whl"]);
    let staging = MemoryStaging::missing_bucket();
    let engines = RecordingEngines::default();

    let err = deploy(&config, &artifacts, &staging, &engines, &RecordingReporter::default())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PreconditionError>(),
        Some(PreconditionError::MultipleArtifacts { .. })
    ));
    assert!(engines.calls().is_empty());
    assert_eq!(staging.upload_count(), 0);
    assert!(staging.created.lock().unwrap().is_empty());
    assert!(artifacts.removed().is_empty());
}

#[test]
fn test_deploy_without_artifact_fails_before_staging() {
    let config = deploy_config(&[]);
    let artifacts = MemoryArtifacts::with(&["pyproject.toml"]);
    let staging = MemoryStaging::default();
    let engines = RecordingEngines::default();

    let err = deploy(&config, &artifacts, &staging, &engines, &RecordingReporter::default())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PreconditionError>(),
        Some(PreconditionError::NoArtifact { .. })
    ));
    assert_eq!(staging.upload_count(), 0);
    assert!(engines.calls().is_empty());
}

#[test]
fn test_update_not_found_is_surfaced_without_create_fallback() {
    let config = deploy_config(&[("AGENT_ENGINE_ID", "999")]);
    let artifacts = MemoryArtifacts::with(&[WHEEL]);
    let engines = RecordingEngines {
        update_status: Some(404),
        ..RecordingEngines::default()
    };

    let err = deploy(
        &config,
        &artifacts,
        &MemoryStaging::default(),
        &engines,
        &RecordingReporter::default(),
    )
    .unwrap_err();

    let calls = engines.calls();
    assert_eq!(calls.len(), 1, "no fallback call expected: {calls:?}");
    assert!(matches!(calls[0], EngineCall::Update(..)));
    assert!(format!("{err:#}").contains("404"));
    assert!(artifacts.removed().is_empty(), "artifact kept on failure");
}

#[test]
fn test_deploy_removes_artifact_after_success() {
    let config = deploy_config(&[]);
    let artifacts = MemoryArtifacts::with(&[WHEEL]);

    deploy(
        &config,
        &artifacts,
        &MemoryStaging::default(),
        &RecordingEngines::default(),
        &RecordingReporter::default(),
    )
    .expect("deploy");

    assert_eq!(artifacts.removed(), vec![WHEEL.to_string()]);
}

#[test]
fn test_deploy_stages_wheel_tarball_and_requirements_under_gcs_dir() {
    let config = deploy_config(&[("GCS_DIR_NAME", "staging/demo")]);
    let staging = MemoryStaging::default();
    let engines = RecordingEngines::default();

    deploy(
        &config,
        &MemoryArtifacts::with(&[WHEEL]),
        &staging,
        &engines,
        &RecordingReporter::default(),
    )
    .expect("deploy");

    let uploads = staging.uploads.lock().unwrap().clone();
    let objects: Vec<(&str, &str, &str)> = uploads
        .iter()
        .map(|(bucket, object, _, content_type)| {
            (bucket.as_str(), object.as_str(), content_type.as_str())
        })
        .collect();
    assert_eq!(
        objects,
        vec![
            (BUCKET, "staging/demo/dependencies.tar.gz", "application/gzip"),
            (BUCKET, "staging/demo/requirements.txt", "text/plain"),
        ]
    );

    // The tarball carries the wheel at its root; requirements name that path.
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(uploads[0].2.as_slice()));
    let packed: Vec<(String, Vec<u8>)> = archive
        .entries()
        .unwrap()
        .map(|entry| {
            let mut entry = entry.unwrap();
            let path = entry.path().unwrap().to_string_lossy().into_owned();
            let mut body = Vec::new();
            entry.read_to_end(&mut body).unwrap();
            (path, body)
        })
        .collect();
    assert_eq!(packed, vec![(WHEEL.to_string(), b"PK\x03\x04".to_vec())]);
    assert_eq!(uploads[1].2, format!("{WHEEL}\n").into_bytes());

    let EngineCall::Create(_, body) = &engines.calls()[0] else {
        panic!("expected create");
    };
    assert_eq!(
        body.spec.package_spec.dependency_files_gcs_uri,
        "gs://b1/staging/demo/dependencies.tar.gz"
    );
    assert_eq!(
        body.spec.package_spec.requirements_gcs_uri,
        "gs://b1/staging/demo/requirements.txt"
    );
    assert_eq!(
        body.spec.service_account,
        "demo-app@p1.iam.gserviceaccount.com"
    );
    let env: Vec<&str> = body
        .spec
        .deployment_spec
        .env
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert!(env.contains(&"AGENT_NAME"));
    assert!(env.contains(&"LOG_LEVEL"));
    assert!(env.contains(&"OTEL_INSTRUMENTATION_GENAI_CAPTURE_MESSAGE_CONTENT"));
    assert!(!env.contains(&"OAUTH_CLIENT_ID"));
}

#[test]
fn test_missing_bucket_is_created() {
    let staging = MemoryStaging::missing_bucket();
    ensure_staging_bucket(&staging, &RecordingReporter::default(), BUCKET).expect("ensure");
    assert_eq!(staging.created.lock().unwrap().clone(), vec![BUCKET.to_string()]);
}

#[test]
fn test_existing_bucket_is_not_recreated() {
    let staging = MemoryStaging::default();
    ensure_staging_bucket(&staging, &RecordingReporter::default(), BUCKET).expect("ensure");
    assert!(staging.created.lock().unwrap().is_empty());
}

#[test]
fn test_bucket_create_race_is_a_notice() {
    let staging = MemoryStaging {
        exists: false,
        create_result: agent_engine_cli::application::ports::BucketCreation::AlreadyExists,
        ..MemoryStaging::default()
    };
    let reporter = RecordingReporter::default();
    ensure_staging_bucket(&staging, &reporter, BUCKET).expect("ensure");
    assert_eq!(reporter.warnings().len(), 1);
}
