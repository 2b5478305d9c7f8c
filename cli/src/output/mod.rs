//! Output formatting module

pub mod chat;
pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use serde_json::Value;

use crate::application::services::authorization::AuthorizationDeleteOutcome;
use crate::application::services::deploy::DeployOutcome;
use crate::application::services::engine_delete::EngineDeleteOutcome;
use crate::application::services::registration::{RegisterOutcome, UnregisterOutcome};
use crate::application::services::remote_session::SessionSummary;
use crate::domain::ConfigMode;
use crate::domain::registry::AgentRecord;

pub use chat::TerminalChat;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags.
    ///
    /// `NO_COLOR` reaches this through the `--no-color` flag's env binding.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty;

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Renderer selected by the output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Configuration review ahead of a command. JSON mode prints nothing
    /// here; the command's result object is the only stdout output.
    pub fn render_config(&self, mode: ConfigMode, summary: &[(&'static str, String)]) {
        if let Self::Human(r) = self {
            r.render_config(mode, summary);
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_check(
        &self,
        mode: ConfigMode,
        summary: &[(&'static str, String)],
        artifact: Option<Result<&str, String>>,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_check(mode, summary, artifact);
                Ok(())
            }
            Self::Json(r) => r.render_check(mode, summary, artifact),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_deploy(&self, outcome: &DeployOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_deploy(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_deploy(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_engine_delete(&self, outcome: &EngineDeleteOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_engine_delete(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_engine_delete(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_register(&self, outcome: &RegisterOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_register(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_register(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_registration_updated(&self, record: &AgentRecord) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_registration_updated(record);
                Ok(())
            }
            Self::Json(r) => r.render_registration_updated(record),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_unregister(&self, outcome: &UnregisterOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_unregister(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_unregister(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_registrations(&self, records: &[AgentRecord]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_registrations(records);
                Ok(())
            }
            Self::Json(r) => r.render_registrations(records),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_session(&self, summary: &SessionSummary) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_session(summary);
                Ok(())
            }
            Self::Json(r) => r.render_session(summary),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_authorization_created(&self, response: &Value) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_authorization_created(response);
                Ok(())
            }
            Self::Json(r) => r.render_authorization_created(response),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_authorization_delete(
        &self,
        name: &str,
        outcome: AuthorizationDeleteOutcome,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_authorization_delete(name, outcome);
                Ok(())
            }
            Self::Json(r) => r.render_authorization_delete(name, outcome),
        }
    }
}
