//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifact;
pub mod authorization;
pub mod config;
pub mod deploy;
pub mod env;
pub mod error;
pub mod registry;
pub mod resource;
pub mod session;

pub use config::{
    BaseConfig, ConfigMode, CreateAuthorizationConfig, CredentialSource, DeleteAuthorizationConfig,
    DeleteConfig, DeployConfig, LocalRunConfig, ModeConfig, OAuthSetup, RegisterConfig,
    RemoteTestConfig, Secret, validate,
};
pub use env::EnvSnapshot;
pub use error::{ApiError, ConfigError, InteractionError, PreconditionError};
pub use resource::{DirectoryLocation, EngineParent, ReasoningEngineName};
