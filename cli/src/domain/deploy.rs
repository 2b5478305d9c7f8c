//! Create-vs-update decision and the reasoning engine payload.
//!
//! Pure functions only: no I/O.

use serde::{Deserialize, Serialize};

use crate::domain::config::DeployConfig;
use crate::domain::error::ApiError;
use crate::domain::resource::{EngineParent, ReasoningEngineName};

/// Agent framework tag sent with every engine spec.
pub const AGENT_FRAMEWORK: &str = "google-adk";

/// Python runtime the packaged agent targets.
pub const PYTHON_VERSION: &str = "3.12";

/// File name of the generated requirements list in the staging directory.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// File name of the extra-packages tarball in the staging directory.
pub const DEPENDENCIES_ARCHIVE: &str = "dependencies.tar.gz";

/// Fields replaced on update.
pub const UPDATE_MASK: &str = "displayName,description,spec";

/// The two-state deploy decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployAction {
    /// No engine id supplied: mint a new engine under this parent.
    Create(EngineParent),
    /// Engine id supplied: refresh exactly this engine. Not-found is fatal.
    Update(ReasoningEngineName),
}

impl DeployAction {
    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    /// Past-tense verb for operator messages.
    #[must_use]
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Create(_) => "created",
            Self::Update(_) => "updated",
        }
    }
}

/// Decide create vs update. `AGENT_ENGINE_ID` is the only input to this branch.
#[must_use]
pub fn plan(config: &DeployConfig) -> DeployAction {
    match config.existing_engine() {
        Some(name) => DeployAction::Update(name),
        None => DeployAction::Create(config.base.parent()),
    }
}

// ── Staging ───────────────────────────────────────────────────────────────────

/// Object name of a staged file: `{gcs_dir}/{file_name}`.
#[must_use]
pub fn staging_object(gcs_dir: &str, file_name: &str) -> String {
    format!("{}/{file_name}", gcs_dir.trim_matches('/'))
}

/// Requirements list naming the artifact by its path inside the dependencies
/// archive; it is both requirement and extra package.
#[must_use]
pub fn requirements_contents(artifact_name: &str) -> String {
    format!("{artifact_name}\n")
}

/// `gs://` URI of an object.
#[must_use]
pub fn gcs_uri(bucket: &str, object: &str) -> String {
    format!("gs://{bucket}/{object}")
}

/// Where the dependencies archive and the requirements list were uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtifact {
    pub dependencies_uri: String,
    pub requirements_uri: String,
}

// ── Engine payload ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResource {
    pub display_name: String,
    pub description: String,
    pub spec: EngineSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSpec {
    pub agent_framework: String,
    pub service_account: String,
    pub package_spec: PackageSpec,
    pub deployment_spec: DeploymentSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    pub requirements_gcs_uri: String,
    pub dependency_files_gcs_uri: String,
    pub python_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentSpec {
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Build the create/update payload. Create and update send the same body.
#[must_use]
pub fn engine_resource(config: &DeployConfig, staged: &StagedArtifact) -> EngineResource {
    EngineResource {
        display_name: config.display_name.clone(),
        description: config.description.clone(),
        spec: EngineSpec {
            agent_framework: AGENT_FRAMEWORK.to_string(),
            service_account: config.base.service_account(),
            package_spec: PackageSpec {
                requirements_gcs_uri: staged.requirements_uri.clone(),
                dependency_files_gcs_uri: staged.dependencies_uri.clone(),
                python_version: PYTHON_VERSION.to_string(),
            },
            deployment_spec: DeploymentSpec {
                env: config
                    .runtime_env_vars()
                    .into_iter()
                    .map(|(name, value)| EnvVar { name, value })
                    .collect(),
            },
        },
    }
}

// ── API responses ─────────────────────────────────────────────────────────────

/// Subset of a reasoning engine resource we read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Long-running operation envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationStatus>,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl Operation {
    /// Engine named by a finished operation.
    ///
    /// Prefers `response.name`; falls back to the engine prefix of the
    /// operation name (`.../reasoningEngines/{id}/operations/{op}`).
    #[must_use]
    pub fn engine(&self) -> Option<ReasoningEngineName> {
        self.response
            .as_ref()
            .and_then(|r| r.get("name"))
            .and_then(serde_json::Value::as_str)
            .and_then(ReasoningEngineName::parse)
            .or_else(|| ReasoningEngineName::parse(&self.name))
    }
}

/// Operation to wait on after a DELETE addressed to `url`.
///
/// An empty body (or `{}`) means the delete completed synchronously.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is neither empty nor a named
/// long-running operation.
pub fn delete_operation(url: &str, response: serde_json::Value) -> Result<Option<Operation>, ApiError> {
    let decode_error = |reason: String| ApiError::Decode {
        url: url.to_string(),
        reason,
    };
    if response.is_null() || response.as_object().is_some_and(serde_json::Map::is_empty) {
        return Ok(None);
    }
    let op: Operation = serde_json::from_value(response).map_err(|e| decode_error(e.to_string()))?;
    if op.name.is_empty() {
        return Err(decode_error("delete response is not a long-running operation".to_string()));
    }
    Ok(Some(op))
}
