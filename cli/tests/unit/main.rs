//! Unit tests for the agent-engine CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod authorization_service;
mod credentials_service;
mod deploy_service;
mod engine_delete_service;
mod property_tests;
