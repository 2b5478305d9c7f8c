//! Mode-specific configuration models and the validation gate.
//!
//! Pure functions only: no I/O, no filesystem access. Every model is built
//! once from an [`EnvSnapshot`] and never reads the environment again.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::env::EnvSnapshot;
use crate::domain::error::{ConfigError, ConfigViolation};
use crate::domain::resource::{
    DirectoryLocation, EngineParent, ReasoningEngineName, VALID_DIRECTORY_LOCATIONS,
    authorization_name, authorizations_url, directory_agents_url, service_account_email,
};

// ── Variable names ────────────────────────────────────────────────────────────

/// External variable names. These are the public contract with `.env` files
/// and CI pipelines.
pub mod vars {
    pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
    pub const GOOGLE_CLOUD_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";
    pub const AGENT_NAME: &str = "AGENT_NAME";
    pub const GOOGLE_CLOUD_STORAGE_BUCKET: &str = "GOOGLE_CLOUD_STORAGE_BUCKET";
    pub const GCS_DIR_NAME: &str = "GCS_DIR_NAME";
    pub const AGENT_DISPLAY_NAME: &str = "AGENT_DISPLAY_NAME";
    pub const AGENT_DESCRIPTION: &str = "AGENT_DESCRIPTION";
    pub const AGENT_ENGINE_ID: &str = "AGENT_ENGINE_ID";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const OTEL_CAPTURE_CONTENT: &str = "OTEL_INSTRUMENTATION_GENAI_CAPTURE_MESSAGE_CONTENT";
    pub const OAUTH_CLIENT_ID: &str = "OAUTH_CLIENT_ID";
    pub const OAUTH_CLIENT_SECRET: &str = "OAUTH_CLIENT_SECRET";
    pub const GEMINI_ENTERPRISE_AUTH_ID: &str = "GEMINI_ENTERPRISE_AUTH_ID";
    pub const AGENTSPACE_APP_ID: &str = "AGENTSPACE_APP_ID";
    pub const AGENTSPACE_APP_LOCATION: &str = "AGENTSPACE_APP_LOCATION";
    pub const API_VERSION: &str = "API_VERSION";
    pub const AUTH_ID: &str = "AUTH_ID";
    pub const AUTH_LOCATION: &str = "AUTH_LOCATION";
    pub const OAUTH_AUTH_URI: &str = "OAUTH_AUTH_URI";
    pub const OAUTH_TOKEN_URI: &str = "OAUTH_TOKEN_URI";
    pub const OAUTH_SCOPES: &str = "OAUTH_SCOPES";
    pub const OAUTH_AUDIENCE: &str = "OAUTH_AUDIENCE";
    pub const OAUTH_PROMPT: &str = "OAUTH_PROMPT";
    pub const GCP_ACCESS_TOKEN: &str = "GCP_ACCESS_TOKEN";
}

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_GCS_DIR_NAME: &str = "agent-engine-staging";
pub const DEFAULT_DISPLAY_NAME: &str = "ADK Agent";
pub const DEFAULT_DESCRIPTION: &str = "ADK Agent";
pub const DEFAULT_API_VERSION: &str = "v1alpha";
pub const DEFAULT_OTEL_CAPTURE_CONTENT: &str = "true";

/// Placeholder printed instead of secret values.
pub const MASK: &str = "***";
const NOT_SET: &str = "(not set)";

pub const VALID_LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

// ── Shared value types ────────────────────────────────────────────────────────

/// String that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

/// Where remote calls get their bearer token from.
///
/// A supplied `GCP_ACCESS_TOKEN` is used exclusively; otherwise credentials
/// are discovered from the ambient environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    AccessToken(Secret),
    Ambient,
}

impl CredentialSource {
    fn describe(&self) -> String {
        match self {
            Self::AccessToken(_) => format!("{} ({MASK})", vars::GCP_ACCESS_TOKEN),
            Self::Ambient => "application default credentials".to_string(),
        }
    }
}

/// Runtime log level forwarded to the deployed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(()),
        }
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Operation a configuration is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    Deploy,
    Delete,
    Register,
    RemoteTest,
    LocalRun,
    CreateAuthorization,
    DeleteAuthorization,
}

impl ConfigMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Delete => "delete",
            Self::Register => "register",
            Self::RemoteTest => "remote-test",
            Self::LocalRun => "local-run",
            Self::CreateAuthorization => "create-auth",
            Self::DeleteAuthorization => "delete-auth",
        }
    }
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed configuration for one operation.
pub trait ModeConfig: Sized {
    /// Operation this model validates for.
    const MODE: ConfigMode;

    /// Build the model, collecting every violation before failing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing each missing or invalid
    /// variable by its external name.
    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError>;

    /// Resolved `(variable, value)` pairs for operator review. Secrets are masked.
    fn summary(&self) -> Vec<(&'static str, String)>;
}

/// Validation gate: build the requested mode's model from a snapshot.
///
/// # Errors
///
/// Returns a [`ConfigError`] describing every violation for the mode.
pub fn validate<T: ModeConfig>(env: &EnvSnapshot) -> Result<T, ConfigError> {
    T::from_env(env)
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Collects violations while fields are read.
///
/// Values read for a violated field are placeholders; `finish` discards the
/// whole model whenever any violation was recorded.
struct EnvReader<'a> {
    env: &'a EnvSnapshot,
    violations: Vec<ConfigViolation>,
}

impl<'a> EnvReader<'a> {
    fn new(env: &'a EnvSnapshot) -> Self {
        Self {
            env,
            violations: Vec::new(),
        }
    }

    fn required(&mut self, var: &'static str) -> String {
        if let Some(value) = self.env.get(var) {
            value.to_string()
        } else {
            self.violations.push(ConfigViolation::Missing { var });
            String::new()
        }
    }

    fn optional(&self, var: &'static str) -> Option<String> {
        self.env.get(var).map(str::to_string)
    }

    fn or_default(&self, var: &'static str, default: &str) -> String {
        self.env.get(var).unwrap_or(default).to_string()
    }

    fn secret(&self, var: &'static str) -> Option<Secret> {
        self.env.get(var).map(Secret::new)
    }

    fn required_choice<T: FromStr + Default>(&mut self, var: &'static str, valid: &[&str]) -> T {
        match self.env.get(var) {
            Some(value) => self.parse_choice(var, value, valid),
            None => {
                self.violations.push(ConfigViolation::Missing { var });
                T::default()
            }
        }
    }

    fn default_choice<T: FromStr + Default>(&mut self, var: &'static str, valid: &[&str]) -> T {
        match self.env.get(var) {
            Some(value) => self.parse_choice(var, value, valid),
            None => T::default(),
        }
    }

    fn parse_choice<T: FromStr + Default>(
        &mut self,
        var: &'static str,
        value: &str,
        valid: &[&str],
    ) -> T {
        value.parse().unwrap_or_else(|_| {
            self.violations.push(ConfigViolation::InvalidValue {
                var,
                value: value.to_string(),
                valid: valid.join(", "),
            });
            T::default()
        })
    }

    fn credentials(&self) -> CredentialSource {
        self.secret(vars::GCP_ACCESS_TOKEN)
            .map_or(CredentialSource::Ambient, CredentialSource::AccessToken)
    }

    fn base(&mut self) -> BaseConfig {
        BaseConfig {
            project: self.required(vars::GOOGLE_CLOUD_PROJECT),
            location: self.required(vars::GOOGLE_CLOUD_LOCATION),
            agent_name: self.required(vars::AGENT_NAME),
        }
    }

    fn finish<T>(self, mode: ConfigMode, value: T) -> Result<T, ConfigError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ConfigError::Invalid {
                mode: mode.as_str(),
                violations: self.violations,
            })
        }
    }
}

fn display_opt(value: Option<&str>) -> String {
    value.unwrap_or(NOT_SET).to_string()
}

fn display_secret(value: Option<&Secret>) -> String {
    if value.is_some() { MASK } else { NOT_SET }.to_string()
}

/// `KEY=value` pairs in key order, comma separated.
fn display_env(env: &BTreeMap<String, String>) -> String {
    env.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Base ──────────────────────────────────────────────────────────────────────

/// Identity fields shared by every remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConfig {
    pub project: String,
    pub location: String,
    pub agent_name: String,
}

impl BaseConfig {
    /// Service account the agent runs as (must already exist with IAM roles).
    #[must_use]
    pub fn service_account(&self) -> String {
        service_account_email(&self.agent_name, &self.project)
    }

    #[must_use]
    pub fn parent(&self) -> EngineParent {
        EngineParent::new(&self.project, &self.location)
    }
}

// ── Deploy ────────────────────────────────────────────────────────────────────

/// Configuration for creating or updating an agent engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub base: BaseConfig,
    pub credentials: CredentialSource,
    pub staging_bucket: String,
    pub gcs_dir_name: String,
    pub display_name: String,
    pub description: String,
    /// Present: update this engine. Absent: create a new one.
    pub existing_engine_id: Option<String>,
    pub log_level: LogLevel,
    pub otel_capture_content: String,
    pub oauth_client_id: Option<Secret>,
    pub oauth_client_secret: Option<Secret>,
    pub gemini_enterprise_auth_id: Option<String>,
}

impl DeployConfig {
    /// Engine to update, when an id was supplied.
    #[must_use]
    pub fn existing_engine(&self) -> Option<ReasoningEngineName> {
        self.existing_engine_id
            .as_deref()
            .map(|id| self.base.parent().engine(id))
    }

    #[must_use]
    pub fn staging_bucket_uri(&self) -> String {
        format!("gs://{}", self.staging_bucket)
    }

    /// Environment variables injected into the deployed agent's runtime.
    #[must_use]
    pub fn runtime_env_vars(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        env.insert(vars::AGENT_NAME.to_string(), self.base.agent_name.clone());
        env.insert(vars::LOG_LEVEL.to_string(), self.log_level.as_str().to_string());
        env.insert(
            vars::OTEL_CAPTURE_CONTENT.to_string(),
            self.otel_capture_content.clone(),
        );
        if let Some(id) = &self.oauth_client_id {
            env.insert(vars::OAUTH_CLIENT_ID.to_string(), id.expose().to_string());
        }
        if let Some(secret) = &self.oauth_client_secret {
            env.insert(vars::OAUTH_CLIENT_SECRET.to_string(), secret.expose().to_string());
        }
        if let Some(auth_id) = &self.gemini_enterprise_auth_id {
            env.insert(vars::GEMINI_ENTERPRISE_AUTH_ID.to_string(), auth_id.clone());
        }
        env
    }

    /// Runtime variables safe to print.
    #[must_use]
    pub fn masked_runtime_env_vars(&self) -> BTreeMap<String, String> {
        let mut env = self.runtime_env_vars();
        for key in [vars::OAUTH_CLIENT_ID, vars::OAUTH_CLIENT_SECRET] {
            if let Some(value) = env.get_mut(key) {
                *value = MASK.to_string();
            }
        }
        env
    }
}

impl ModeConfig for DeployConfig {
    const MODE: ConfigMode = ConfigMode::Deploy;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            base: r.base(),
            credentials: r.credentials(),
            staging_bucket: r.required(vars::GOOGLE_CLOUD_STORAGE_BUCKET),
            gcs_dir_name: r.or_default(vars::GCS_DIR_NAME, DEFAULT_GCS_DIR_NAME),
            display_name: r.or_default(vars::AGENT_DISPLAY_NAME, DEFAULT_DISPLAY_NAME),
            description: r.or_default(vars::AGENT_DESCRIPTION, DEFAULT_DESCRIPTION),
            existing_engine_id: r.optional(vars::AGENT_ENGINE_ID),
            log_level: r.default_choice(vars::LOG_LEVEL, VALID_LOG_LEVELS),
            otel_capture_content: r
                .or_default(vars::OTEL_CAPTURE_CONTENT, DEFAULT_OTEL_CAPTURE_CONTENT),
            oauth_client_id: r.secret(vars::OAUTH_CLIENT_ID),
            oauth_client_secret: r.secret(vars::OAUTH_CLIENT_SECRET),
            gemini_enterprise_auth_id: r.optional(vars::GEMINI_ENTERPRISE_AUTH_ID),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        let runtime = display_env(&self.masked_runtime_env_vars());
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.base.project.clone()),
            (vars::GOOGLE_CLOUD_LOCATION, self.base.location.clone()),
            (vars::GOOGLE_CLOUD_STORAGE_BUCKET, self.staging_bucket.clone()),
            (vars::AGENT_NAME, self.base.agent_name.clone()),
            (vars::GCS_DIR_NAME, self.gcs_dir_name.clone()),
            (vars::AGENT_DISPLAY_NAME, self.display_name.clone()),
            (vars::AGENT_DESCRIPTION, self.description.clone()),
            (vars::AGENT_ENGINE_ID, display_opt(self.existing_engine_id.as_deref())),
            ("SERVICE_ACCOUNT", self.base.service_account()),
            (vars::OAUTH_CLIENT_ID, display_secret(self.oauth_client_id.as_ref())),
            (vars::OAUTH_CLIENT_SECRET, display_secret(self.oauth_client_secret.as_ref())),
            (
                vars::GEMINI_ENTERPRISE_AUTH_ID,
                display_opt(self.gemini_enterprise_auth_id.as_deref()),
            ),
            ("CREDENTIALS", self.credentials.describe()),
            ("RUNTIME_ENV_VARS", runtime),
        ]
    }
}

// ── Delete ────────────────────────────────────────────────────────────────────

/// Configuration for deleting an agent engine. There is no create fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfig {
    pub base: BaseConfig,
    pub credentials: CredentialSource,
    pub engine_id: String,
}

impl DeleteConfig {
    #[must_use]
    pub fn engine(&self) -> ReasoningEngineName {
        self.base.parent().engine(&self.engine_id)
    }
}

impl ModeConfig for DeleteConfig {
    const MODE: ConfigMode = ConfigMode::Delete;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            base: r.base(),
            credentials: r.credentials(),
            engine_id: r.required(vars::AGENT_ENGINE_ID),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.base.project.clone()),
            (vars::GOOGLE_CLOUD_LOCATION, self.base.location.clone()),
            (vars::AGENT_ENGINE_ID, self.engine_id.clone()),
            ("REASONING_ENGINE", self.engine().to_string()),
            ("CREDENTIALS", self.credentials.describe()),
        ]
    }
}

// ── Register ──────────────────────────────────────────────────────────────────

/// State of the optional OAuth authorization reference for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthSetup {
    /// Client id, secret and authorization id are all set.
    Complete {
        auth_id: String,
        auth_location: DirectoryLocation,
    },
    /// Some but not all variables are set; names of the missing ones.
    Partial { missing: Vec<&'static str> },
    Disabled,
}

/// Configuration for Agentspace registration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    pub base: BaseConfig,
    pub credentials: CredentialSource,
    pub engine_id: String,
    pub app_id: String,
    pub app_location: DirectoryLocation,
    pub api_version: String,
    pub display_name: String,
    pub description: String,
    pub oauth_client_id: Option<Secret>,
    pub oauth_client_secret: Option<Secret>,
    pub auth_id: Option<String>,
    pub auth_location: DirectoryLocation,
}

impl RegisterConfig {
    /// Full name of the engine being registered.
    #[must_use]
    pub fn reasoning_engine(&self) -> ReasoningEngineName {
        self.base.parent().engine(&self.engine_id)
    }

    /// Agents collection of the configured Agentspace app.
    #[must_use]
    pub fn endpoint(&self) -> String {
        directory_agents_url(
            self.app_location,
            &self.api_version,
            &self.base.project,
            &self.app_id,
        )
    }

    #[must_use]
    pub fn oauth_setup(&self) -> OAuthSetup {
        let mut missing = Vec::new();
        if self.oauth_client_id.is_none() {
            missing.push(vars::OAUTH_CLIENT_ID);
        }
        if self.oauth_client_secret.is_none() {
            missing.push(vars::OAUTH_CLIENT_SECRET);
        }
        if self.auth_id.is_none() {
            missing.push(vars::AUTH_ID);
        }
        match (&self.auth_id, missing.len()) {
            (Some(auth_id), 0) => OAuthSetup::Complete {
                auth_id: auth_id.clone(),
                auth_location: self.auth_location,
            },
            (_, 3) => OAuthSetup::Disabled,
            _ => OAuthSetup::Partial { missing },
        }
    }
}

impl ModeConfig for RegisterConfig {
    const MODE: ConfigMode = ConfigMode::Register;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            base: r.base(),
            credentials: r.credentials(),
            engine_id: r.required(vars::AGENT_ENGINE_ID),
            app_id: r.required(vars::AGENTSPACE_APP_ID),
            app_location: r.required_choice(vars::AGENTSPACE_APP_LOCATION, VALID_DIRECTORY_LOCATIONS),
            api_version: r.or_default(vars::API_VERSION, DEFAULT_API_VERSION),
            display_name: r.or_default(vars::AGENT_DISPLAY_NAME, DEFAULT_DISPLAY_NAME),
            description: r.or_default(vars::AGENT_DESCRIPTION, DEFAULT_DESCRIPTION),
            oauth_client_id: r.secret(vars::OAUTH_CLIENT_ID),
            oauth_client_secret: r.secret(vars::OAUTH_CLIENT_SECRET),
            auth_id: r.optional(vars::AUTH_ID),
            auth_location: r.default_choice(vars::AUTH_LOCATION, VALID_DIRECTORY_LOCATIONS),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.base.project.clone()),
            (vars::GOOGLE_CLOUD_LOCATION, self.base.location.clone()),
            (vars::API_VERSION, self.api_version.clone()),
            (vars::AGENTSPACE_APP_ID, self.app_id.clone()),
            (vars::AGENTSPACE_APP_LOCATION, self.app_location.to_string()),
            (vars::AGENT_ENGINE_ID, self.engine_id.clone()),
            (vars::AGENT_DISPLAY_NAME, self.display_name.clone()),
            (vars::AGENT_DESCRIPTION, self.description.clone()),
            (vars::AUTH_ID, display_opt(self.auth_id.as_deref())),
            ("REASONING_ENGINE", self.reasoning_engine().to_string()),
            ("ENDPOINT", self.endpoint()),
            ("CREDENTIALS", self.credentials.describe()),
        ]
    }
}

// ── Remote test ───────────────────────────────────────────────────────────────

/// Configuration for an interactive session against a deployed engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTestConfig {
    pub base: BaseConfig,
    pub credentials: CredentialSource,
    pub engine_id: String,
}

impl RemoteTestConfig {
    #[must_use]
    pub fn engine(&self) -> ReasoningEngineName {
        self.base.parent().engine(&self.engine_id)
    }
}

impl ModeConfig for RemoteTestConfig {
    const MODE: ConfigMode = ConfigMode::RemoteTest;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            base: r.base(),
            credentials: r.credentials(),
            engine_id: r.required(vars::AGENT_ENGINE_ID),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.base.project.clone()),
            (vars::GOOGLE_CLOUD_LOCATION, self.base.location.clone()),
            (vars::AGENT_ENGINE_ID, self.engine_id.clone()),
            ("CREDENTIALS", self.credentials.describe()),
        ]
    }
}

// ── Local run ─────────────────────────────────────────────────────────────────

/// Minimal configuration for local iteration; only the project is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRunConfig {
    pub project: String,
    pub location: Option<String>,
    pub agent_name: Option<String>,
}

impl ModeConfig for LocalRunConfig {
    const MODE: ConfigMode = ConfigMode::LocalRun;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            project: r.required(vars::GOOGLE_CLOUD_PROJECT),
            location: r.optional(vars::GOOGLE_CLOUD_LOCATION),
            agent_name: r.optional(vars::AGENT_NAME),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.project.clone()),
            (vars::GOOGLE_CLOUD_LOCATION, display_opt(self.location.as_deref())),
            (vars::AGENT_NAME, display_opt(self.agent_name.as_deref())),
        ]
    }
}

// ── Authorizations ────────────────────────────────────────────────────────────

/// Configuration for creating an Agentspace OAuth authorization resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAuthorizationConfig {
    pub project: String,
    pub credentials: CredentialSource,
    pub auth_id: String,
    pub oauth_client_id: Secret,
    pub oauth_client_secret: Secret,
    pub oauth_auth_uri: String,
    pub oauth_token_uri: String,
    pub oauth_scopes: Option<String>,
    pub oauth_audience: Option<String>,
    pub oauth_prompt: Option<String>,
    pub auth_location: DirectoryLocation,
    pub api_version: String,
}

impl CreateAuthorizationConfig {
    #[must_use]
    pub fn collection_url(&self) -> String {
        authorizations_url(self.auth_location, &self.api_version, &self.project)
    }

    #[must_use]
    pub fn resource_name(&self) -> String {
        authorization_name(&self.project, self.auth_location, &self.auth_id)
    }
}

impl ModeConfig for CreateAuthorizationConfig {
    const MODE: ConfigMode = ConfigMode::CreateAuthorization;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            project: r.required(vars::GOOGLE_CLOUD_PROJECT),
            credentials: r.credentials(),
            auth_id: r.required(vars::AUTH_ID),
            oauth_client_id: Secret::new(r.required(vars::OAUTH_CLIENT_ID)),
            oauth_client_secret: Secret::new(r.required(vars::OAUTH_CLIENT_SECRET)),
            oauth_auth_uri: r.required(vars::OAUTH_AUTH_URI),
            oauth_token_uri: r.required(vars::OAUTH_TOKEN_URI),
            oauth_scopes: r.optional(vars::OAUTH_SCOPES),
            oauth_audience: r.optional(vars::OAUTH_AUDIENCE),
            oauth_prompt: r.optional(vars::OAUTH_PROMPT),
            auth_location: r.default_choice(vars::AUTH_LOCATION, VALID_DIRECTORY_LOCATIONS),
            api_version: r.or_default(vars::API_VERSION, DEFAULT_API_VERSION),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.project.clone()),
            (vars::AUTH_ID, self.auth_id.clone()),
            (vars::AUTH_LOCATION, self.auth_location.to_string()),
            (vars::API_VERSION, self.api_version.clone()),
            (vars::OAUTH_CLIENT_ID, MASK.to_string()),
            (vars::OAUTH_CLIENT_SECRET, MASK.to_string()),
            (vars::OAUTH_AUTH_URI, self.oauth_auth_uri.clone()),
            (vars::OAUTH_TOKEN_URI, self.oauth_token_uri.clone()),
            (vars::OAUTH_SCOPES, display_opt(self.oauth_scopes.as_deref())),
            (vars::OAUTH_AUDIENCE, display_opt(self.oauth_audience.as_deref())),
            (vars::OAUTH_PROMPT, display_opt(self.oauth_prompt.as_deref())),
            ("CREDENTIALS", self.credentials.describe()),
        ]
    }
}

/// Configuration for deleting an Agentspace authorization resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAuthorizationConfig {
    pub project: String,
    pub credentials: CredentialSource,
    pub auth_id: String,
    pub auth_location: DirectoryLocation,
    pub api_version: String,
}

impl DeleteAuthorizationConfig {
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            authorizations_url(self.auth_location, &self.api_version, &self.project),
            self.auth_id
        )
    }

    #[must_use]
    pub fn resource_name(&self) -> String {
        authorization_name(&self.project, self.auth_location, &self.auth_id)
    }
}

impl ModeConfig for DeleteAuthorizationConfig {
    const MODE: ConfigMode = ConfigMode::DeleteAuthorization;

    fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let mut r = EnvReader::new(env);
        let config = Self {
            project: r.required(vars::GOOGLE_CLOUD_PROJECT),
            credentials: r.credentials(),
            auth_id: r.required(vars::AUTH_ID),
            auth_location: r.default_choice(vars::AUTH_LOCATION, VALID_DIRECTORY_LOCATIONS),
            api_version: r.or_default(vars::API_VERSION, DEFAULT_API_VERSION),
        };
        r.finish(Self::MODE, config)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::GOOGLE_CLOUD_PROJECT, self.project.clone()),
            (vars::AUTH_ID, self.auth_id.clone()),
            (vars::AUTH_LOCATION, self.auth_location.to_string()),
            (vars::API_VERSION, self.api_version.clone()),
            ("CREDENTIALS", self.credentials.describe()),
        ]
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
