//! Application context: unified state passed to every command handler.
//!
//! The environment is captured exactly once here (`.env` layered under the
//! process environment). Command handlers validate their mode's config from
//! this snapshot and never read the live environment again.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::credentials;
use crate::domain::{CredentialSource, EnvSnapshot, ModeConfig, validate};
use crate::infra::command_runner::StdCommandRunner;
use crate::infra::env_file;
use crate::infra::http::GoogleClient;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// `.env` file layered beneath the process environment.
    pub env_file: PathBuf,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Immutable configuration input for this invocation.
    pub env: EnvSnapshot,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the `.env` file exists but cannot
    /// be parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        // JSON output keeps stdout to a single object; progress still goes
        // to stderr unless --quiet is given.
        let output = OutputContext::new(
            flags.output.no_color || flags.output.json,
            flags.output.quiet,
        );
        let env = env_file::capture(&flags.env_file)?;
        Ok(Self { output, mode, env })
    }

    /// Build an `AppContext` from an explicit snapshot.
    #[must_use]
    pub fn with_env(output: OutputContext, mode: OutputMode, env: EnvSnapshot) -> Self {
        Self { output, mode, env }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter bound to this context's output settings.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Validate the configuration for `T`'s mode and show it for review.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming every missing or invalid variable.
    pub fn load_config<T: ModeConfig>(&self) -> Result<T> {
        let config = validate::<T>(&self.env)?;
        self.renderer().render_config(T::MODE, &config.summary());
        Ok(config)
    }

    /// Authenticated client for Google APIs, billed to `project`.
    ///
    /// # Errors
    ///
    /// Returns an auth error if no bearer token can be obtained.
    pub fn google_client(
        &self,
        credentials: &CredentialSource,
        project: &str,
    ) -> Result<GoogleClient> {
        let token = credentials::access_token(credentials, &StdCommandRunner)?;
        Ok(GoogleClient::new(token).with_quota_project(project))
    }
}
