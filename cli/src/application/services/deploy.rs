//! Application service: create-or-update of the agent engine.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{
    ArtifactStore, BucketCreation, EngineApi, ProgressReporter, StagingStore,
};
use crate::domain::DeployConfig;
use crate::domain::ReasoningEngineName;
use crate::domain::artifact;
use crate::domain::deploy::{
    self, DEPENDENCIES_ARCHIVE, DeployAction, REQUIREMENTS_FILE, StagedArtifact,
    requirements_contents, staging_object,
};

/// Result of a successful deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub action: DeployAction,
    pub engine: ReasoningEngineName,
    pub artifact: String,
}

/// Find the single build artifact in the working directory.
///
/// # Errors
///
/// Returns a `PreconditionError` when there is not exactly one artifact, or
/// an I/O error if the directory cannot be listed.
pub fn discover_artifact(artifacts: &impl ArtifactStore) -> Result<String> {
    let location = artifacts.location();
    let names = artifacts
        .list_names()
        .with_context(|| format!("listing {location}"))?;
    Ok(artifact::select_single(&location, names)?)
}

/// Make sure the staging bucket exists, creating it when missing.
///
/// # Errors
///
/// Returns an error if the bucket cannot be read (e.g. permission denied)
/// or created.
pub fn ensure_staging_bucket(
    staging: &impl StagingStore,
    reporter: &impl ProgressReporter,
    bucket: &str,
) -> Result<()> {
    if staging.bucket_exists(bucket)? {
        reporter.success(&format!("staging bucket '{bucket}' exists"));
        return Ok(());
    }
    let created = reporter.wait(&format!("creating staging bucket '{bucket}'..."), || {
        staging.create_bucket(bucket)
    })?;
    match created {
        BucketCreation::Created => {
            reporter.success(&format!("staging bucket '{bucket}' created"));
        }
        BucketCreation::AlreadyExists => {
            reporter.warn(&format!("bucket '{bucket}' already exists, continuing"));
        }
    }
    Ok(())
}

fn stage_artifact(
    staging: &impl StagingStore,
    artifacts: &impl ArtifactStore,
    config: &DeployConfig,
    name: &str,
) -> Result<StagedArtifact> {
    let wheel = artifacts
        .read(name)
        .with_context(|| format!("reading {name}"))?;
    let archive = artifact::pack_dependencies(name, &wheel)
        .with_context(|| format!("packing {name} into {DEPENDENCIES_ARCHIVE}"))?;
    let dependencies_uri = staging.upload(
        &config.staging_bucket,
        &staging_object(&config.gcs_dir_name, DEPENDENCIES_ARCHIVE),
        archive,
        "application/gzip",
    )?;
    let requirements_uri = staging.upload(
        &config.staging_bucket,
        &staging_object(&config.gcs_dir_name, REQUIREMENTS_FILE),
        requirements_contents(name).into_bytes(),
        "text/plain",
    )?;
    Ok(StagedArtifact {
        dependencies_uri,
        requirements_uri,
    })
}

/// Create or update the engine described by `config`.
///
/// Steps:
/// 1. Discover exactly one artifact (no network calls before this succeeds)
/// 2. Ensure the staging bucket and upload the artifact, packed as a tarball
/// 3. Create when no engine id is configured, otherwise update that engine
/// 4. Remove the local artifact
///
/// An update that fails (including not-found) is surfaced as-is; it never
/// falls back to create.
///
/// # Errors
///
/// Returns an error on precondition failure or any remote failure.
pub fn deploy(
    config: &DeployConfig,
    artifacts: &impl ArtifactStore,
    staging: &impl StagingStore,
    engines: &impl EngineApi,
    reporter: &impl ProgressReporter,
) -> Result<DeployOutcome> {
    let artifact = discover_artifact(artifacts)?;
    reporter.step(&format!("using artifact {artifact}"));

    ensure_staging_bucket(staging, reporter, &config.staging_bucket)?;

    let staged = reporter.wait(&format!("uploading {artifact}..."), || {
        stage_artifact(staging, artifacts, config, &artifact)
    })?;
    tracing::debug!(uri = %staged.dependencies_uri, "artifact staged");

    let body = deploy::engine_resource(config, &staged);
    let action = deploy::plan(config);
    let engine = match &action {
        DeployAction::Create(parent) => reporter
            .wait("creating new agent engine...", || {
                engines.create_engine(parent, &body)
            })
            .context("creating agent engine")?,
        DeployAction::Update(name) => reporter
            .wait(
                &format!("updating agent engine {}...", name.engine_id),
                || engines.update_engine(name, &body),
            )
            .with_context(|| format!("updating agent engine {}", name.engine_id))?,
    };
    tracing::info!(engine = %engine, "agent engine {}", action.past_tense());
    reporter.success(&format!("agent engine {}: {engine}", action.past_tense()));

    match artifacts.remove(&artifact) {
        Ok(()) => reporter.step(&format!("removed local artifact {artifact}")),
        Err(e) => reporter.warn(&format!("could not remove {artifact}: {e:#}")),
    }

    Ok(DeployOutcome {
        action,
        engine,
        artifact,
    })
}
