//! `agent-engine create-auth` / `delete-auth`: Agentspace OAuth
//! authorization resources.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::authorization;
use crate::domain::{CreateAuthorizationConfig, DeleteAuthorizationConfig};
use crate::infra::discovery::DiscoveryClient;
use crate::infra::terminal::TerminalConfirmer;

/// Run `agent-engine create-auth`.
///
/// # Errors
///
/// Returns an error on invalid configuration or any remote failure.
pub fn create(app: &AppContext) -> Result<()> {
    let config: CreateAuthorizationConfig = app.load_config()?;
    let api = DiscoveryClient::new(app.google_client(&config.credentials, &config.project)?);
    let response = authorization::create_authorization(&config, &api, &app.reporter())?;
    app.renderer().render_authorization_created(&response)
}

/// Run `agent-engine delete-auth`.
///
/// # Errors
///
/// Returns an error on invalid configuration, when no terminal is
/// available to confirm, or on any remote failure.
pub fn delete(app: &AppContext) -> Result<()> {
    let config: DeleteAuthorizationConfig = app.load_config()?;
    let api = DiscoveryClient::new(app.google_client(&config.credentials, &config.project)?);
    let outcome =
        authorization::delete_authorization(&config, &api, &TerminalConfirmer, &app.reporter())?;
    app.renderer()
        .render_authorization_delete(&config.resource_name(), outcome)
}
