//! Agentspace registration records.
//!
//! Records are keyed by the engine id embedded in
//! `adkAgentDefinition.provisionedReasoningEngine.reasoningEngine`, never by
//! display name.

use serde::{Deserialize, Serialize};

use crate::domain::config::RegisterConfig;
use crate::domain::resource::last_segment;

/// A registration record as listed or written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        alias = "adk_agent_definition",
        skip_serializing_if = "Option::is_none"
    )]
    pub adk_agent_definition: Option<AdkAgentDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdkAgentDefinition {
    #[serde(default, alias = "tool_settings", skip_serializing_if = "Option::is_none")]
    pub tool_settings: Option<ToolSettings>,
    #[serde(
        default,
        alias = "provisioned_reasoning_engine",
        skip_serializing_if = "Option::is_none"
    )]
    pub provisioned_reasoning_engine: Option<ProvisionedReasoningEngine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorizations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSettings {
    #[serde(default, alias = "tool_description")]
    pub tool_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedReasoningEngine {
    #[serde(default, alias = "reasoning_engine")]
    pub reasoning_engine: String,
}

impl AgentRecord {
    /// Directory-side id: last segment of `name`.
    #[must_use]
    pub fn registration_id(&self) -> &str {
        last_segment(&self.name)
    }

    /// Engine id embedded in the record, if the record is engine-backed.
    #[must_use]
    pub fn engine_id(&self) -> Option<&str> {
        self.adk_agent_definition
            .as_ref()?
            .provisioned_reasoning_engine
            .as_ref()
            .map(|p| last_segment(&p.reasoning_engine))
            .filter(|id| !id.is_empty())
    }
}

/// One page of the agents list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentListPage {
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Record whose embedded engine id equals `engine_id`.
#[must_use]
pub fn find_registration<'a>(records: &'a [AgentRecord], engine_id: &str) -> Option<&'a AgentRecord> {
    records.iter().find(|r| r.engine_id() == Some(engine_id))
}

/// Full registration payload. Update resends it whole.
#[must_use]
pub fn registration_payload(config: &RegisterConfig, authorization: Option<String>) -> AgentRecord {
    AgentRecord {
        name: String::new(),
        display_name: config.display_name.clone(),
        description: config.description.clone(),
        adk_agent_definition: Some(AdkAgentDefinition {
            tool_settings: Some(ToolSettings {
                tool_description: config.description.clone(),
            }),
            provisioned_reasoning_engine: Some(ProvisionedReasoningEngine {
                reasoning_engine: config.reasoning_engine().to_string(),
            }),
            authorizations: authorization.into_iter().collect(),
        }),
    }
}

/// Display metadata that differs between a stored record and the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    pub field: &'static str,
    pub stored: String,
    pub configured: String,
}

/// Compare the stored record with the configured display metadata.
#[must_use]
pub fn drift(record: &AgentRecord, config: &RegisterConfig) -> Vec<Drift> {
    let mut out = Vec::new();
    if record.display_name != config.display_name {
        out.push(Drift {
            field: "displayName",
            stored: record.display_name.clone(),
            configured: config.display_name.clone(),
        });
    }
    if record.description != config.description {
        out.push(Drift {
            field: "description",
            stored: record.description.clone(),
            configured: config.description.clone(),
        });
    }
    out
}
