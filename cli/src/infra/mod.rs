//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to Google APIs,
//! process execution, filesystem access, `.env` loading, and prompts.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod discovery;
pub mod env_file;
pub mod fs;
pub mod http;
pub mod storage;
pub mod terminal;
pub mod vertex;
