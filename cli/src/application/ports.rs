//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Every port is synchronous and blocking: one call completes (or fails)
//! before the next begins.

use std::process::Output;

use anyhow::Result;
use serde_json::Value;

use crate::domain::authorization::AuthorizationResource;
use crate::domain::deploy::{EngineInfo, EngineResource};
use crate::domain::registry::{AgentListPage, AgentRecord};
use crate::domain::{EngineParent, ReasoningEngineName};

// ── Resource-management API ──────────────────────────────────────────────────

/// Reasoning engine lifecycle. Create/update/delete block until the
/// long-running operation finishes.
pub trait EngineApi {
    /// Create a new engine and return its full name.
    fn create_engine(
        &self,
        parent: &EngineParent,
        body: &EngineResource,
    ) -> Result<ReasoningEngineName>;
    /// Replace the given engine's display metadata and spec.
    fn update_engine(
        &self,
        name: &ReasoningEngineName,
        body: &EngineResource,
    ) -> Result<ReasoningEngineName>;
    /// Fetch an engine.
    fn get_engine(&self, name: &ReasoningEngineName) -> Result<EngineInfo>;
    /// Delete an engine.
    fn delete_engine(&self, name: &ReasoningEngineName) -> Result<()>;
}

/// Session operations against a deployed engine.
pub trait EngineSessions {
    /// Create a session and return its id.
    fn create_session(&self, engine: &ReasoningEngineName, user_id: &str) -> Result<String>;
    /// Send one message, invoking `on_event` for each streamed event in order.
    fn stream_query(
        &self,
        engine: &ReasoningEngineName,
        user_id: &str,
        session_id: &str,
        message: &str,
        on_event: &mut dyn FnMut(&Value),
    ) -> Result<()>;
    /// Delete a session.
    fn delete_session(
        &self,
        engine: &ReasoningEngineName,
        user_id: &str,
        session_id: &str,
    ) -> Result<()>;
}

// ── Staging storage ──────────────────────────────────────────────────────────

/// Outcome of a bucket create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketCreation {
    Created,
    /// The name was taken between the existence check and the create call.
    AlreadyExists,
}

/// Cloud storage used to stage the build artifact.
pub trait StagingStore {
    /// Whether the bucket exists. A permission failure is an error, not `false`.
    fn bucket_exists(&self, bucket: &str) -> Result<bool>;
    /// Create the bucket with uniform access and public access prevention enforced.
    fn create_bucket(&self, bucket: &str) -> Result<BucketCreation>;
    /// Upload `bytes` as `object` and return its `gs://` URI.
    fn upload(&self, bucket: &str, object: &str, bytes: Vec<u8>, content_type: &str)
    -> Result<String>;
}

// ── Local artifacts ──────────────────────────────────────────────────────────

/// Working directory holding the build artifact.
pub trait ArtifactStore {
    /// Directory shown in diagnostics.
    fn location(&self) -> String;
    /// File names in the directory (not recursive).
    fn list_names(&self) -> Result<Vec<String>>;
    /// Read a file's contents.
    fn read(&self, name: &str) -> Result<Vec<u8>>;
    /// Remove a file.
    fn remove(&self, name: &str) -> Result<()>;
}

// ── Directory service ────────────────────────────────────────────────────────

/// Agentspace agents collection, addressed by its endpoint URL.
pub trait DirectoryApi {
    /// Fetch one page of records.
    fn list_page(&self, endpoint: &str, page_token: Option<&str>) -> Result<AgentListPage>;
    /// Create a record.
    fn create_record(&self, endpoint: &str, record: &AgentRecord) -> Result<AgentRecord>;
    /// Replace a record addressed by its registration id.
    fn update_record(
        &self,
        endpoint: &str,
        registration_id: &str,
        record: &AgentRecord,
    ) -> Result<AgentRecord>;
    /// Delete a record addressed by its registration id.
    fn delete_record(&self, endpoint: &str, registration_id: &str) -> Result<()>;
}

/// Agentspace authorization resources.
pub trait AuthorizationApi {
    /// Create an authorization; returns the service's response body.
    fn create_authorization(&self, url: &str, body: &AuthorizationResource) -> Result<Value>;
    /// Delete an authorization.
    fn delete_authorization(&self, url: &str) -> Result<()>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner {
    /// Run a program and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Operator interaction ─────────────────────────────────────────────────────

/// Explicit yes/no consent. Never auto-confirms.
pub trait Confirmer {
    /// Ask the operator; the default answer is "no".
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::NotInteractive` when no terminal is attached.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Line-oriented chat console for interactive sessions.
pub trait ChatConsole {
    /// Read one line; `None` at end of input.
    fn read_line(&self, prompt: &str) -> Result<Option<String>>;
    /// Show one text part of an agent reply.
    fn show_reply(&self, text: &str);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Run a blocking call while showing `message` as pending.
    fn wait<T>(&self, message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.step(message);
        f()
    }
}
