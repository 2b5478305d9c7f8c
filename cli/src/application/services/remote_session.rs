//! Application service: interactive session against a deployed engine.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::{ChatConsole, EngineSessions, ProgressReporter};
use crate::domain::ReasoningEngineName;
use crate::domain::session::{QUIT_COMMAND, SESSION_USER_ID, is_quit, text_parts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: String,
    /// Messages sent before the session ended.
    pub turns: usize,
}

/// Open a session, relay operator input until `quit` or end of input, and
/// delete the session on the way out.
///
/// The session is deleted even when a query fails; the query error wins.
///
/// # Errors
///
/// Returns an error if the session cannot be created, a query fails, or
/// the session cannot be deleted.
pub fn run_session(
    engine: &ReasoningEngineName,
    sessions: &impl EngineSessions,
    console: &impl ChatConsole,
    reporter: &impl ProgressReporter,
) -> Result<SessionSummary> {
    let session_id = reporter
        .wait("creating session...", || {
            sessions.create_session(engine, SESSION_USER_ID)
        })
        .with_context(|| format!("creating session on {engine}"))?;
    reporter.success(&format!("initiated session {session_id}"));
    reporter.step(&format!("type '{QUIT_COMMAND}' to exit"));

    let turns = converse(engine, &session_id, sessions, console);

    let cleanup = reporter.wait(&format!("deleting session {session_id}..."), || {
        sessions.delete_session(engine, SESSION_USER_ID, &session_id)
    });
    let turns = turns?;
    cleanup.with_context(|| format!("deleting session {session_id}"))?;
    reporter.success("session deleted");

    Ok(SessionSummary { session_id, turns })
}

fn converse(
    engine: &ReasoningEngineName,
    session_id: &str,
    sessions: &impl EngineSessions,
    console: &impl ChatConsole,
) -> Result<usize> {
    let mut turns = 0;
    while let Some(line) = console.read_line("User input")? {
        if is_quit(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        sessions.stream_query(
            engine,
            SESSION_USER_ID,
            session_id,
            line.trim(),
            &mut |event: &Value| {
                for text in text_parts(event) {
                    console.show_reply(&text);
                }
            },
        )?;
        turns += 1;
    }
    Ok(turns)
}
