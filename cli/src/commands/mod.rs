//! Command implementations
//!
//! Each handler validates its mode's configuration from the captured
//! snapshot, builds the infra adapters, runs one application service and
//! renders the outcome.

pub mod authorization;
pub mod check;
pub mod delete;
pub mod deploy;
pub mod registration;
