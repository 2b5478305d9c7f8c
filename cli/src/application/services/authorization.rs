//! Application service: Agentspace authorization resources.

use anyhow::Result;
use serde_json::Value;

use crate::application::ports::{AuthorizationApi, Confirmer, ProgressReporter};
use crate::domain::authorization::{authorization_payload, create_url};
use crate::domain::{CreateAuthorizationConfig, DeleteAuthorizationConfig, DirectoryLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDeleteOutcome {
    Deleted,
    Cancelled,
}

fn warn_if_regional(location: DirectoryLocation, reporter: &impl ProgressReporter) {
    if location != DirectoryLocation::Global {
        reporter.warn(&format!(
            "authorization resources normally live in 'global'; using '{location}'"
        ));
    }
}

/// Create the configured authorization resource.
///
/// # Errors
///
/// Returns an error if the create call fails.
pub fn create_authorization(
    config: &CreateAuthorizationConfig,
    api: &impl AuthorizationApi,
    reporter: &impl ProgressReporter,
) -> Result<Value> {
    warn_if_regional(config.auth_location, reporter);
    let body = authorization_payload(config);
    let response = reporter.wait(
        &format!("creating authorization '{}'...", config.auth_id),
        || api.create_authorization(&create_url(config), &body),
    )?;
    reporter.success(&format!("authorization '{}' created", config.auth_id));
    Ok(response)
}

/// Delete the configured authorization resource after explicit consent.
///
/// # Errors
///
/// Returns an error if no terminal is available to confirm or the delete fails.
pub fn delete_authorization(
    config: &DeleteAuthorizationConfig,
    api: &impl AuthorizationApi,
    confirmer: &impl Confirmer,
    reporter: &impl ProgressReporter,
) -> Result<AuthorizationDeleteOutcome> {
    warn_if_regional(config.auth_location, reporter);
    let prompt = format!(
        "Delete authorization '{}' from project '{}'?",
        config.auth_id, config.project
    );
    if !confirmer.confirm(&prompt)? {
        reporter.warn("delete authorization cancelled");
        return Ok(AuthorizationDeleteOutcome::Cancelled);
    }
    reporter.wait(
        &format!("deleting authorization '{}'...", config.auth_id),
        || api.delete_authorization(&config.resource_url()),
    )?;
    reporter.success(&format!("authorization '{}' deleted", config.auth_id));
    Ok(AuthorizationDeleteOutcome::Deleted)
}
