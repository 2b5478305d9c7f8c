//! Interactive confirmation via `dialoguer`.

use std::io::IsTerminal as _;

use anyhow::{Context, Result};

use crate::application::ports::Confirmer;
use crate::domain::InteractionError;

/// Prompts on the attached terminal with a `[y/N]` default of "no".
///
/// There is no bypass: without a terminal on both stdin and stderr the
/// prompt fails instead of assuming consent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    fn interactive() -> bool {
        std::io::stdin().is_terminal() && console::user_attended_stderr()
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !Self::interactive() {
            return Err(InteractionError::NotInteractive {
                action: prompt.trim_end_matches('?').to_string(),
            }
            .into());
        }
        let answer = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("reading confirmation")?;
        tracing::debug!(answer, "confirmation answered");
        Ok(answer)
    }
}
