//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;
use serde_json::Value;

use crate::application::services::authorization::AuthorizationDeleteOutcome;
use crate::application::services::deploy::DeployOutcome;
use crate::application::services::engine_delete::EngineDeleteOutcome;
use crate::application::services::registration::{RegisterOutcome, UnregisterOutcome};
use crate::application::services::remote_session::SessionSummary;
use crate::domain::ConfigMode;
use crate::domain::registry::AgentRecord;
use crate::output::OutputContext;

const NONE: &str = "-";

/// Renders command results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the resolved configuration for operator review.
    pub fn render_config(&self, mode: ConfigMode, summary: &[(&'static str, String)]) {
        if self.ctx.quiet {
            return;
        }
        println!();
        println!(
            "  {}",
            format!("Configuration ({mode})").style(self.ctx.styles.header)
        );
        let width = summary.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in summary {
            println!(
                "    {}  {value}",
                format!("{key:<width$}").style(self.ctx.styles.dim)
            );
        }
        println!();
    }

    /// Render a `check` result: the configuration, plus artifact discovery
    /// for `deploy`.
    pub fn render_check(
        &self,
        mode: ConfigMode,
        summary: &[(&'static str, String)],
        artifact: Option<Result<&str, String>>,
    ) {
        self.render_config(mode, summary);
        match artifact {
            Some(Ok(name)) => self.ctx.success(&format!("artifact: {name}")),
            Some(Err(reason)) => self.ctx.warn(&format!("artifact: {reason}")),
            None => {}
        }
        self.ctx.success(&format!("configuration valid for {mode}"));
    }

    /// Progress lines already went to stderr; this prints the result.
    pub fn render_deploy(&self, outcome: &DeployOutcome) {
        self.ctx.kv("Resource:", &outcome.engine.to_string());
        self.ctx.kv("Engine ID:", &outcome.engine.engine_id);
        if !outcome.action.is_update() && !self.ctx.quiet {
            println!();
            self.ctx.info(&format!(
                "Set AGENT_ENGINE_ID={} so the next deploy updates this engine",
                outcome.engine.engine_id
            ));
        }
    }

    pub fn render_engine_delete(&self, outcome: &EngineDeleteOutcome) {
        match outcome {
            EngineDeleteOutcome::Deleted {
                engine,
                display_name,
            } => self
                .ctx
                .success(&format!("deleted '{display_name}' ({engine})")),
            EngineDeleteOutcome::Cancelled => self.ctx.info("Deletion cancelled."),
        }
    }

    pub fn render_register(&self, outcome: &RegisterOutcome) {
        match outcome {
            RegisterOutcome::AlreadyRegistered { record, drift } => {
                self.ctx.kv("Registration ID:", record.registration_id());
                if !drift.is_empty() {
                    self.ctx.info(
                        "Run `agent-engine update-registration` to apply the configured values",
                    );
                }
            }
            RegisterOutcome::Registered(record) => {
                self.ctx.kv("Registration ID:", record.registration_id());
                self.ctx.kv("Display name:", &record.display_name);
            }
        }
    }

    pub fn render_registration_updated(&self, record: &AgentRecord) {
        self.ctx.success(&format!(
            "updated registration {} ('{}')",
            record.registration_id(),
            record.display_name
        ));
    }

    pub fn render_unregister(&self, outcome: &UnregisterOutcome) {
        match outcome {
            UnregisterOutcome::NotRegistered => {
                self.ctx.info("No registration found for this engine; nothing to do");
            }
            UnregisterOutcome::Cancelled => self.ctx.info("Unregister cancelled."),
            UnregisterOutcome::Unregistered { registration_id } => {
                self.ctx.success(&format!("unregistered {registration_id}"));
            }
        }
    }

    /// Render registrations as an aligned table. The table itself is the
    /// command's result and is printed even when `quiet`.
    pub fn render_registrations(&self, records: &[AgentRecord]) {
        if records.is_empty() {
            self.ctx.info("No agents registered in this app.");
            return;
        }
        let rows: Vec<[&str; 3]> = records
            .iter()
            .map(|r| {
                [
                    r.display_name.as_str(),
                    r.registration_id(),
                    r.engine_id().unwrap_or(NONE),
                ]
            })
            .collect();
        let headers = ["DISPLAY NAME", "REGISTRATION ID", "ENGINE ID"];
        let mut widths = headers.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }
        println!(
            "  {}",
            format!(
                "{:<w0$}  {:<w1$}  {}",
                headers[0],
                headers[1],
                headers[2],
                w0 = widths[0],
                w1 = widths[1]
            )
            .style(self.ctx.styles.bold)
        );
        for row in rows {
            println!(
                "  {:<w0$}  {:<w1$}  {}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1]
            );
        }
    }

    pub fn render_session(&self, summary: &SessionSummary) {
        self.ctx.success(&format!(
            "session {} closed after {} message(s)",
            summary.session_id, summary.turns
        ));
    }

    pub fn render_authorization_created(&self, response: &Value) {
        let name = response
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(NONE);
        self.ctx.success(&format!("authorization created: {name}"));
    }

    pub fn render_authorization_delete(&self, name: &str, outcome: AuthorizationDeleteOutcome) {
        match outcome {
            AuthorizationDeleteOutcome::Deleted => {
                self.ctx.success(&format!("authorization deleted: {name}"));
            }
            AuthorizationDeleteOutcome::Cancelled => self.ctx.info("Deletion cancelled."),
        }
    }
}
