//! Remote session helpers.

use serde_json::Value;

/// User id every interactive session runs as.
pub const SESSION_USER_ID: &str = "user";

/// Input that ends an interactive session.
pub const QUIT_COMMAND: &str = "quit";

/// Whether a line typed by the operator ends the session.
#[must_use]
pub fn is_quit(line: &str) -> bool {
    line.trim() == QUIT_COMMAND
}

/// Text parts of one streamed event (`content.parts[].text`), in order.
#[must_use]
pub fn text_parts(event: &Value) -> Vec<String> {
    event
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Session id from a create-session response (`output.id` or `id`).
#[must_use]
pub fn session_id(response: &Value) -> Option<String> {
    response
        .get("output")
        .unwrap_or(response)
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
}
