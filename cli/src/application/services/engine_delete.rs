//! Application service: delete an agent engine after explicit consent.

use anyhow::{Context, Result};

use crate::application::ports::{Confirmer, EngineApi, ProgressReporter};
use crate::domain::{DeleteConfig, ReasoningEngineName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineDeleteOutcome {
    Deleted {
        engine: ReasoningEngineName,
        display_name: String,
    },
    Cancelled,
}

/// Look the engine up, confirm with the operator, then delete it.
///
/// # Errors
///
/// Returns an error if the engine cannot be retrieved, no terminal is
/// available for confirmation, or the delete call fails.
pub fn delete_engine(
    config: &DeleteConfig,
    engines: &impl EngineApi,
    confirmer: &impl Confirmer,
    reporter: &impl ProgressReporter,
) -> Result<EngineDeleteOutcome> {
    let name = config.engine();
    let info = reporter
        .wait(
            &format!("looking up agent engine {}...", config.engine_id),
            || engines.get_engine(&name),
        )
        .with_context(|| format!("retrieving agent engine '{}'", config.engine_id))?;
    let display_name = info.display_name.unwrap_or_else(|| "(unnamed)".to_string());

    let prompt = format!(
        "Delete agent '{display_name}' with Agent Engine ID '{}'?",
        config.engine_id
    );
    if !confirmer.confirm(&prompt)? {
        reporter.warn("deletion cancelled");
        return Ok(EngineDeleteOutcome::Cancelled);
    }

    reporter.wait(
        &format!("deleting agent engine {}...", config.engine_id),
        || engines.delete_engine(&name),
    )?;
    reporter.success(&format!("agent engine {} deleted", config.engine_id));
    Ok(EngineDeleteOutcome::Deleted {
        engine: name,
        display_name,
    })
}
