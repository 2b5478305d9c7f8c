//! Application service: bearer token and project number resolution.
//!
//! Ambient credentials and the project number come from the `gcloud` CLI,
//! run through the injected `CommandRunner`.

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::{ApiError, CredentialSource, Secret};

const GCLOUD: &str = "gcloud";

/// Resolve the bearer token for remote calls.
///
/// A supplied token is used exclusively; there is no fallback to ambient
/// credentials when it is rejected later.
///
/// # Errors
///
/// Returns [`ApiError::Auth`] if ambient credentials cannot be obtained.
pub fn access_token(source: &CredentialSource, runner: &impl CommandRunner) -> Result<Secret> {
    match source {
        CredentialSource::AccessToken(token) => {
            tracing::debug!("using GCP_ACCESS_TOKEN");
            Ok(token.clone())
        }
        CredentialSource::Ambient => {
            tracing::debug!("GCP_ACCESS_TOKEN not set, using application default credentials");
            let output = runner
                .run(GCLOUD, &["auth", "application-default", "print-access-token"])
                .map_err(|e| {
                    ApiError::Auth(format!(
                        "gcloud CLI not available ({e}). Install it or set GCP_ACCESS_TOKEN"
                    ))
                })?;
            if !output.status.success() {
                return Err(ApiError::Auth(format!(
                    "application default credentials unavailable: {}. Run 'gcloud auth application-default login'",
                    String::from_utf8_lossy(&output.stderr).trim()
                ))
                .into());
            }
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                return Err(ApiError::Auth("gcloud returned an empty access token".to_string()).into());
            }
            Ok(Secret::new(token))
        }
    }
}

/// Look up the numeric project number for `project`.
///
/// # Errors
///
/// Returns an error if `gcloud` fails or prints nothing.
pub fn project_number(runner: &impl CommandRunner, project: &str) -> Result<String> {
    let output = runner
        .run(
            GCLOUD,
            &[
                "projects",
                "describe",
                project,
                "--format=value(projectNumber)",
            ],
        )
        .context("failed to run gcloud")?;
    anyhow::ensure!(
        output.status.success(),
        "gcloud projects describe {project} failed: {}",
        String::from_utf8_lossy(&output.stderr).trim()
    );
    let number = String::from_utf8_lossy(&output.stdout).trim().to_string();
    anyhow::ensure!(!number.is_empty(), "gcloud returned no project number for {project}");
    Ok(number)
}
