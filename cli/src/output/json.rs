//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout. Failures use the error object produced by [`format_error`].

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::services::authorization::AuthorizationDeleteOutcome;
use crate::application::services::deploy::DeployOutcome;
use crate::application::services::engine_delete::EngineDeleteOutcome;
use crate::application::services::registration::{RegisterOutcome, UnregisterOutcome};
use crate::application::services::remote_session::SessionSummary;
use crate::domain::ConfigMode;
use crate::domain::registry::AgentRecord;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

fn print(value: &Value) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

fn config_object(summary: &[(&'static str, String)]) -> Value {
    summary
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::String(value.clone())))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// JSON view of a registration record.
#[must_use]
pub fn record_value(record: &AgentRecord) -> Value {
    json!({
        "name": record.name,
        "registration_id": record.registration_id(),
        "display_name": record.display_name,
        "description": record.description,
        "engine_id": record.engine_id(),
    })
}

/// Renders command results as machine-readable JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_check(
        &self,
        mode: ConfigMode,
        summary: &[(&'static str, String)],
        artifact: Option<Result<&str, String>>,
    ) -> Result<()> {
        let mut obj = json!({
            "mode": mode.as_str(),
            "valid": true,
            "config": config_object(summary),
        });
        match artifact {
            Some(Ok(name)) => obj["artifact"] = json!({ "found": true, "name": name }),
            Some(Err(reason)) => obj["artifact"] = json!({ "found": false, "reason": reason }),
            None => {}
        }
        print(&obj)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_deploy(&self, outcome: &DeployOutcome) -> Result<()> {
        print(&json!({
            "action": if outcome.action.is_update() { "update" } else { "create" },
            "resource_name": outcome.engine.to_string(),
            "engine_id": outcome.engine.engine_id,
            "artifact": outcome.artifact,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_engine_delete(&self, outcome: &EngineDeleteOutcome) -> Result<()> {
        match outcome {
            EngineDeleteOutcome::Deleted {
                engine,
                display_name,
            } => print(&json!({
                "status": "deleted",
                "resource_name": engine.to_string(),
                "display_name": display_name,
            })),
            EngineDeleteOutcome::Cancelled => print(&json!({ "status": "cancelled" })),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_register(&self, outcome: &RegisterOutcome) -> Result<()> {
        match outcome {
            RegisterOutcome::AlreadyRegistered { record, drift } => {
                let drift: Vec<Value> = drift
                    .iter()
                    .map(|d| {
                        json!({ "field": d.field, "registered": d.stored, "configured": d.configured })
                    })
                    .collect();
                print(&json!({
                    "status": "already_registered",
                    "record": record_value(record),
                    "drift": drift,
                }))
            }
            RegisterOutcome::Registered(record) => print(&json!({
                "status": "registered",
                "record": record_value(record),
            })),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_registration_updated(&self, record: &AgentRecord) -> Result<()> {
        print(&json!({ "status": "updated", "record": record_value(record) }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_unregister(&self, outcome: &UnregisterOutcome) -> Result<()> {
        match outcome {
            UnregisterOutcome::NotRegistered => print(&json!({ "status": "not_registered" })),
            UnregisterOutcome::Cancelled => print(&json!({ "status": "cancelled" })),
            UnregisterOutcome::Unregistered { registration_id } => print(&json!({
                "status": "unregistered",
                "registration_id": registration_id,
            })),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_registrations(&self, records: &[AgentRecord]) -> Result<()> {
        let agents: Vec<Value> = records.iter().map(record_value).collect();
        print(&json!({ "agents": agents }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_session(&self, summary: &SessionSummary) -> Result<()> {
        print(&json!({ "session_id": summary.session_id, "turns": summary.turns }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_authorization_created(&self, response: &Value) -> Result<()> {
        print(&json!({ "status": "created", "authorization": response }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_authorization_delete(
        &self,
        name: &str,
        outcome: AuthorizationDeleteOutcome,
    ) -> Result<()> {
        let status = match outcome {
            AuthorizationDeleteOutcome::Deleted => "deleted",
            AuthorizationDeleteOutcome::Cancelled => "cancelled",
        };
        print(&json!({ "status": status, "name": name }))
    }
}
