//! Resource names and endpoints for Agent Engine and Agentspace.
//!
//! Pure functions only: no I/O.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Agent Engine API version used for reasoning engine calls.
pub const ENGINE_API_VERSION: &str = "v1beta1";

/// Region and project that own reasoning engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineParent {
    pub project: String,
    pub location: String,
}

impl EngineParent {
    #[must_use]
    pub fn new(project: &str, location: &str) -> Self {
        Self {
            project: project.to_string(),
            location: location.to_string(),
        }
    }

    /// Address a reasoning engine under this parent.
    #[must_use]
    pub fn engine(&self, engine_id: &str) -> ReasoningEngineName {
        ReasoningEngineName {
            project: self.project.clone(),
            location: self.location.clone(),
            engine_id: engine_id.to_string(),
        }
    }

    /// Regional API root, e.g. `https://us-central1-aiplatform.googleapis.com/v1beta1`.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!(
            "https://{}-aiplatform.googleapis.com/{ENGINE_API_VERSION}",
            self.location
        )
    }

    /// Collection URL used to create reasoning engines.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/locations/{}/reasoningEngines",
            self.api_root(),
            self.project,
            self.location
        )
    }
}

/// Fully-qualified reasoning engine name:
/// `projects/{project}/locations/{location}/reasoningEngines/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningEngineName {
    pub project: String,
    pub location: String,
    pub engine_id: String,
}

impl ReasoningEngineName {
    #[must_use]
    pub fn parent(&self) -> EngineParent {
        EngineParent::new(&self.project, &self.location)
    }

    /// REST URL of this engine.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/{self}", self.parent().api_root())
    }

    /// Parse a full name; trailing segments (e.g. `/operations/..`) are ignored.
    #[must_use]
    pub fn parse(full: &str) -> Option<Self> {
        let mut parts = full.trim_matches('/').split('/');
        match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (
                Some("projects"),
                Some(project),
                Some("locations"),
                Some(location),
                Some("reasoningEngines"),
                Some(engine_id),
            ) if !project.is_empty() && !location.is_empty() && !engine_id.is_empty() => {
                Some(Self {
                    project: project.to_string(),
                    location: location.to_string(),
                    engine_id: engine_id.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for ReasoningEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/locations/{}/reasoningEngines/{}",
            self.project, self.location, self.engine_id
        )
    }
}

/// Last `/`-separated segment of a resource name.
#[must_use]
pub fn last_segment(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Characters left as-is in query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single query parameter value.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Service account the deployed agent runs as.
#[must_use]
pub fn service_account_email(agent_name: &str, project: &str) -> String {
    format!("{agent_name}-app@{project}.iam.gserviceaccount.com")
}

// ── Agentspace locations ──────────────────────────────────────────────────────

pub const VALID_DIRECTORY_LOCATIONS: &[&str] = &["global", "us", "eu"];

/// Agentspace (Discovery Engine) multi-region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryLocation {
    #[default]
    Global,
    Us,
    Eu,
}

impl DirectoryLocation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Us => "us",
            Self::Eu => "eu",
        }
    }

    /// Fixed Discovery Engine API host for this location.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::Global => "discoveryengine.googleapis.com",
            Self::Us => "us-discoveryengine.googleapis.com",
            Self::Eu => "eu-discoveryengine.googleapis.com",
        }
    }
}

impl FromStr for DirectoryLocation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DirectoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agents collection of an Agentspace app's default assistant.
#[must_use]
pub fn directory_agents_url(
    location: DirectoryLocation,
    api_version: &str,
    project: &str,
    app_id: &str,
) -> String {
    format!(
        "https://{}/{api_version}/projects/{project}/locations/{location}/collections/default_collection/engines/{app_id}/assistants/default_assistant/agents",
        location.host()
    )
}

/// Collection URL for Agentspace authorization resources.
#[must_use]
pub fn authorizations_url(location: DirectoryLocation, api_version: &str, project: &str) -> String {
    format!(
        "https://{}/{api_version}/projects/{project}/locations/{location}/authorizations",
        location.host()
    )
}

/// Resource name of an authorization, keyed by project number or id.
#[must_use]
pub fn authorization_name(project: &str, location: DirectoryLocation, auth_id: &str) -> String {
    format!("projects/{project}/locations/{location}/authorizations/{auth_id}")
}
