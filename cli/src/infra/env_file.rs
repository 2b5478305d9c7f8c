//! Environment capture: `.env` file layered under the process environment.

use std::path::Path;

use crate::domain::{ConfigError, EnvSnapshot};

/// Read `KEY=VALUE` pairs from an env file. A missing file yields no pairs.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if the file exists but cannot be parsed.
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let to_error = |e: &dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    };
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.map(|item| item.map_err(|e| to_error(&e))).collect(),
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "env file not found, using process environment only");
            Ok(Vec::new())
        }
        Err(e) => Err(to_error(&e)),
    }
}

/// Capture the environment once: file values first, process values on top.
///
/// The process environment is never modified.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if the env file cannot be parsed.
pub fn capture(path: &Path) -> Result<EnvSnapshot, ConfigError> {
    let file = read_env_file(path)?;
    let process = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    let snapshot = EnvSnapshot::layered(file, process);
    tracing::debug!(vars = snapshot.len(), "environment captured");
    Ok(snapshot)
}
