//! Agentspace registration commands: `register`, `update-registration`,
//! `unregister` and `list`.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::registration;
use crate::domain::RegisterConfig;
use crate::infra::command_runner::StdCommandRunner;
use crate::infra::discovery::DiscoveryClient;
use crate::infra::terminal::TerminalConfirmer;

fn client(app: &AppContext, config: &RegisterConfig) -> Result<DiscoveryClient> {
    let http = app.google_client(&config.credentials, &config.base.project)?;
    Ok(DiscoveryClient::new(http))
}

/// Run `agent-engine register`.
///
/// # Errors
///
/// Returns an error on invalid configuration or any remote failure.
pub fn register(app: &AppContext) -> Result<()> {
    let config: RegisterConfig = app.load_config()?;
    let api = client(app, &config)?;
    let outcome = registration::register(&config, &api, &StdCommandRunner, &app.reporter())?;
    app.renderer().render_register(&outcome)
}

/// Run `agent-engine update-registration`.
///
/// # Errors
///
/// Returns an error on invalid configuration, when the engine is not
/// registered, or on any remote failure.
pub fn update(app: &AppContext) -> Result<()> {
    let config: RegisterConfig = app.load_config()?;
    let api = client(app, &config)?;
    let record =
        registration::update_registration(&config, &api, &StdCommandRunner, &app.reporter())?;
    app.renderer().render_registration_updated(&record)
}

/// Run `agent-engine unregister`.
///
/// # Errors
///
/// Returns an error on invalid configuration, when no terminal is
/// available to confirm, or on any remote failure.
pub fn unregister(app: &AppContext) -> Result<()> {
    let config: RegisterConfig = app.load_config()?;
    let api = client(app, &config)?;
    let outcome =
        registration::unregister(&config, &api, &TerminalConfirmer, &app.reporter())?;
    app.renderer().render_unregister(&outcome)
}

/// Run `agent-engine list`.
///
/// # Errors
///
/// Returns an error on invalid configuration or any remote failure.
pub fn list(app: &AppContext) -> Result<()> {
    let config: RegisterConfig = app.load_config()?;
    let api = client(app, &config)?;
    let records = registration::list_registrations(&api, &config.endpoint())?;
    app.renderer().render_registrations(&records)
}
