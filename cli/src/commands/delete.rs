//! `agent-engine delete`: delete the configured agent engine.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::engine_delete;
use crate::domain::DeleteConfig;
use crate::infra::terminal::TerminalConfirmer;
use crate::infra::vertex::VertexEngineClient;

/// Run `agent-engine delete`.
///
/// # Errors
///
/// Returns an error on invalid configuration, when no terminal is
/// available to confirm, or on any remote failure.
pub fn run(app: &AppContext) -> Result<()> {
    let config: DeleteConfig = app.load_config()?;
    let http = app.google_client(&config.credentials, &config.base.project)?;
    let engines = VertexEngineClient::new(http);

    let outcome =
        engine_delete::delete_engine(&config, &engines, &TerminalConfirmer, &app.reporter())?;
    app.renderer().render_engine_delete(&outcome)
}
