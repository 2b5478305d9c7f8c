//! `agent-engine check <MODE>`: validate and print a mode's configuration
//! without touching the network.

use anyhow::Result;
use clap::ValueEnum;

use crate::app::AppContext;
use crate::application::services::deploy::discover_artifact;
use crate::domain::{
    CreateAuthorizationConfig, DeleteAuthorizationConfig, DeleteConfig, DeployConfig,
    LocalRunConfig, ModeConfig, RegisterConfig, RemoteTestConfig, validate,
};
use crate::infra::fs::LocalArtifactStore;

/// Configuration mode to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckMode {
    Deploy,
    Delete,
    Register,
    RemoteTest,
    LocalRun,
    CreateAuth,
    DeleteAuth,
}

/// Run `agent-engine check <MODE>`.
///
/// # Errors
///
/// Returns a configuration error naming every missing or invalid variable.
/// A missing deploy artifact is reported, not failed.
pub fn run(app: &AppContext, mode: CheckMode) -> Result<()> {
    match mode {
        CheckMode::Deploy => {
            let config: DeployConfig = validate(&app.env)?;
            let artifact = LocalArtifactStore::current_dir()
                .and_then(|store| discover_artifact(&store))
                .map_err(|e| format!("{e:#}"));
            app.renderer().render_check(
                DeployConfig::MODE,
                &config.summary(),
                Some(artifact.as_deref().map_err(Clone::clone)),
            )
        }
        CheckMode::Delete => check::<DeleteConfig>(app),
        CheckMode::Register => check::<RegisterConfig>(app),
        CheckMode::RemoteTest => check::<RemoteTestConfig>(app),
        CheckMode::LocalRun => check::<LocalRunConfig>(app),
        CheckMode::CreateAuth => check::<CreateAuthorizationConfig>(app),
        CheckMode::DeleteAuth => check::<DeleteAuthorizationConfig>(app),
    }
}

fn check<T: ModeConfig>(app: &AppContext) -> Result<()> {
    let config: T = validate(&app.env)?;
    app.renderer().render_check(T::MODE, &config.summary(), None)
}
