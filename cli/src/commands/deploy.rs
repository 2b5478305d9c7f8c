//! `agent-engine deploy`: create or update the agent engine.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::deploy::{self, discover_artifact};
use crate::domain::DeployConfig;
use crate::infra::fs::LocalArtifactStore;
use crate::infra::storage::GcsStagingStore;
use crate::infra::vertex::VertexEngineClient;

/// Run `agent-engine deploy`.
///
/// # Errors
///
/// Returns an error on invalid configuration, a missing or ambiguous
/// artifact, or any remote failure.
pub fn run(app: &AppContext) -> Result<()> {
    let config: DeployConfig = app.load_config()?;
    let artifacts = LocalArtifactStore::current_dir()?;
    // Artifact preconditions fail before credentials are resolved.
    discover_artifact(&artifacts)?;

    let http = app.google_client(&config.credentials, &config.base.project)?;
    let staging = GcsStagingStore::new(http.clone(), &config.base.project);
    let engines = VertexEngineClient::new(http);

    let outcome = deploy::deploy(&config, &artifacts, &staging, &engines, &app.reporter())?;
    app.renderer().render_deploy(&outcome)
}
