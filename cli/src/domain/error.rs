//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. `main` inspects the chain to pick the exit code.

use thiserror::Error;

/// Process exit status for a configuration error (sysexits `EX_CONFIG`).
pub const EXIT_CONFIG: i32 = 78;

/// Process exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

// ── Config errors ─────────────────────────────────────────────────────────────

/// A single configuration problem, named by its external variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("{var}: required but not set")]
    Missing { var: &'static str },

    #[error("{var}: invalid value '{value}' (valid values: {valid})")]
    InvalidValue {
        var: &'static str,
        value: String,
        valid: String,
    },
}

impl ConfigViolation {
    /// External variable name the operator has to fix.
    #[must_use]
    pub fn var(&self) -> &'static str {
        match self {
            Self::Missing { var } | Self::InvalidValue { var, .. } => var,
        }
    }
}

/// Errors raised while turning the environment into a typed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{mode} configuration is invalid:\n{}", render_violations(.violations))]
    Invalid {
        mode: &'static str,
        violations: Vec<ConfigViolation>,
    },

    #[error("cannot read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

impl ConfigError {
    /// External variable names referenced by this error, in report order.
    #[must_use]
    pub fn variables(&self) -> Vec<&'static str> {
        match self {
            Self::Invalid { violations, .. } => violations.iter().map(ConfigViolation::var).collect(),
            Self::EnvFile { .. } => Vec::new(),
        }
    }
}

fn render_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Precondition errors ───────────────────────────────────────────────────────

/// Local preconditions checked before any network call.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("No .{extension} build artifact found in {dir}. Build one first: uv build --wheel --out-dir .")]
    NoArtifact { dir: String, extension: &'static str },

    #[error("Found {} .{extension} build artifacts in {dir}, expected exactly one: {}", .found.len(), .found.join(", "))]
    MultipleArtifacts {
        dir: String,
        extension: &'static str,
        found: Vec<String>,
    },
}

// ── Remote API errors ─────────────────────────────────────────────────────────

/// Failures reported by a remote Google API, surfaced verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {url} failed with HTTP {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{method} {url} failed: {reason}")]
    Transport {
        method: &'static str,
        url: String,
        reason: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("operation {name} failed: {message}")]
    Operation { name: String, message: String },

    #[error("operation {name} did not finish within {seconds}s")]
    OperationTimeout { name: String, seconds: u64 },

    #[error("authentication failed: {0}")]
    Auth(String),
}

impl ApiError {
    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ── Interaction errors ────────────────────────────────────────────────────────

/// Errors related to operator interaction.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("{action} requires an interactive terminal to confirm; refusing to continue without consent")]
    NotInteractive { action: String },
}

// ── Exit code mapping ─────────────────────────────────────────────────────────

/// Pick the process exit code for an error chain.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.chain().any(|e| e.downcast_ref::<ConfigError>().is_some()) {
        EXIT_CONFIG
    } else {
        EXIT_FAILURE
    }
}

/// Short machine-readable code for `--json` error output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return "config_error";
        }
        if cause.downcast_ref::<PreconditionError>().is_some() {
            return "precondition_failed";
        }
        if cause.downcast_ref::<ApiError>().is_some() {
            return "api_error";
        }
        if cause.downcast_ref::<InteractionError>().is_some() {
            return "not_interactive";
        }
    }
    "error"
}
