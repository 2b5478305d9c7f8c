//! Unit tests for deleting an agent engine behind explicit consent.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use agent_engine_cli::application::services::engine_delete::{EngineDeleteOutcome, delete_engine};
use agent_engine_cli::domain::InteractionError;
use mockall::predicate::function;

use crate::helpers::delete_config;
use crate::mocks::{EngineCall, MockConfirmer, RecordingEngines, RecordingReporter};

#[test]
fn test_confirmed_delete_removes_engine() {
    let engines = RecordingEngines::default();
    let mut confirmer = MockConfirmer::new();
    confirmer
        .expect_confirm()
        .with(function(|p: &str| p.contains("Demo Agent") && p.contains("'123'")))
        .times(1)
        .returning(|_| Ok(true));

    let outcome = delete_engine(
        &delete_config(),
        &engines,
        &confirmer,
        &RecordingReporter::default(),
    )
    .expect("delete");

    assert!(matches!(
        outcome,
        EngineDeleteOutcome::Deleted { ref display_name, .. } if display_name == "Demo Agent"
    ));
    let calls = engines.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[1], EngineCall::Delete(ref n) if n.engine_id == "123"));
}

#[test]
fn test_declined_delete_issues_no_delete_call() {
    let engines = RecordingEngines::default();
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().times(1).returning(|_| Ok(false));

    let outcome = delete_engine(
        &delete_config(),
        &engines,
        &confirmer,
        &RecordingReporter::default(),
    )
    .expect("declining is not an error");

    assert_eq!(outcome, EngineDeleteOutcome::Cancelled);
    assert!(
        !engines
            .calls()
            .iter()
            .any(|c| matches!(c, EngineCall::Delete(_)))
    );
}

#[test]
fn test_delete_without_terminal_is_fatal() {
    let engines = RecordingEngines::default();
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().returning(|p| {
        Err(InteractionError::NotInteractive {
            action: p.to_string(),
        }
        .into())
    });

    let err = delete_engine(
        &delete_config(),
        &engines,
        &confirmer,
        &RecordingReporter::default(),
    )
    .unwrap_err();

    assert!(err.downcast_ref::<InteractionError>().is_some());
    assert!(
        !engines
            .calls()
            .iter()
            .any(|c| matches!(c, EngineCall::Delete(_)))
    );
}

#[test]
fn test_missing_engine_fails_before_prompting() {
    let engines = RecordingEngines {
        get_status: Some(404),
        ..RecordingEngines::default()
    };
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().never();

    let err = delete_engine(
        &delete_config(),
        &engines,
        &confirmer,
        &RecordingReporter::default(),
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("retrieving agent engine '123'"));
}
