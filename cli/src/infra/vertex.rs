//! Agent Engine (Vertex AI reasoning engines) adapter.
//!
//! Create, update and delete return long-running operations; they are polled
//! sequentially at a fixed interval until done or the wait bound is reached.

use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::{Value, json};

use crate::application::ports::{EngineApi, EngineSessions};
use crate::domain::deploy::{
    EngineInfo, EngineResource, Operation, UPDATE_MASK, delete_operation,
};
use crate::domain::session::session_id;
use crate::domain::{ApiError, EngineParent, ReasoningEngineName};
use crate::infra::http::GoogleClient;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

pub struct VertexEngineClient {
    http: GoogleClient,
    poll_interval: Duration,
    timeout: Duration,
}

impl VertexEngineClient {
    #[must_use]
    pub fn new(http: GoogleClient) -> Self {
        Self {
            http,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Block until `op` is done. An operation error is surfaced verbatim.
    fn wait(&self, api_root: &str, mut op: Operation) -> Result<Operation, ApiError> {
        let deadline = Instant::now() + self.timeout;
        while !op.done {
            if Instant::now() >= deadline {
                return Err(ApiError::OperationTimeout {
                    name: op.name,
                    seconds: self.timeout.as_secs(),
                });
            }
            tracing::debug!(operation = %op.name, "operation pending");
            std::thread::sleep(self.poll_interval);
            op = self.http.get_json(&format!("{api_root}/{}", op.name))?;
        }
        if let Some(status) = op.error.take() {
            return Err(ApiError::Operation {
                name: op.name,
                message: format!("{} (code {})", status.message, status.code),
            });
        }
        Ok(op)
    }

    fn finished_engine(op: &Operation, fallback: Option<&ReasoningEngineName>) -> Result<ReasoningEngineName> {
        op.engine()
            .or_else(|| fallback.cloned())
            .ok_or_else(|| {
                ApiError::Decode {
                    url: op.name.clone(),
                    reason: "operation finished without a reasoning engine name".to_string(),
                }
                .into()
            })
    }

    fn query(&self, engine: &ReasoningEngineName, class_method: &str, input: Value) -> Result<Value> {
        let body = json!({ "class_method": class_method, "input": input });
        Ok(self
            .http
            .send_json("POST", &format!("{}:query", engine.url()), &body)?)
    }
}

impl EngineApi for VertexEngineClient {
    fn create_engine(
        &self,
        parent: &EngineParent,
        body: &EngineResource,
    ) -> Result<ReasoningEngineName> {
        let op: Operation = self.http.send_json("POST", &parent.collection_url(), body)?;
        tracing::info!(operation = %op.name, "create operation started");
        let op = self.wait(&parent.api_root(), op)?;
        Self::finished_engine(&op, None)
    }

    fn update_engine(
        &self,
        name: &ReasoningEngineName,
        body: &EngineResource,
    ) -> Result<ReasoningEngineName> {
        let url = format!("{}?updateMask={UPDATE_MASK}", name.url());
        let op: Operation = self.http.send_json("PATCH", &url, body)?;
        tracing::info!(operation = %op.name, "update operation started");
        let op = self.wait(&name.parent().api_root(), op)?;
        Self::finished_engine(&op, Some(name))
    }

    fn get_engine(&self, name: &ReasoningEngineName) -> Result<EngineInfo> {
        Ok(self.http.get_json(&name.url())?)
    }

    fn delete_engine(&self, name: &ReasoningEngineName) -> Result<()> {
        let url = name.url();
        let response = self.http.delete(&url)?;
        if let Some(op) = delete_operation(&url, response)? {
            tracing::info!(operation = %op.name, "delete operation started");
            self.wait(&name.parent().api_root(), op)?;
        }
        Ok(())
    }
}

impl EngineSessions for VertexEngineClient {
    fn create_session(&self, engine: &ReasoningEngineName, user_id: &str) -> Result<String> {
        let response = self.query(engine, "async_create_session", json!({ "user_id": user_id }))?;
        session_id(&response).ok_or_else(|| {
            ApiError::Decode {
                url: format!("{}:query", engine.url()),
                reason: "session response has no id".to_string(),
            }
            .into()
        })
    }

    fn stream_query(
        &self,
        engine: &ReasoningEngineName,
        user_id: &str,
        session_id: &str,
        message: &str,
        on_event: &mut dyn FnMut(&Value),
    ) -> Result<()> {
        let url = format!("{}:streamQuery?alt=sse", engine.url());
        let body = json!({
            "class_method": "async_stream_query",
            "input": { "user_id": user_id, "session_id": session_id, "message": message },
        });
        self.http.stream_lines(&url, &body, &mut |line| {
            let data = line.strip_prefix("data:").map_or(line, str::trim_start);
            let event: Value = serde_json::from_str(data).map_err(|e| ApiError::Decode {
                url: url.clone(),
                reason: e.to_string(),
            })?;
            on_event(&event);
            Ok(())
        })?;
        Ok(())
    }

    fn delete_session(
        &self,
        engine: &ReasoningEngineName,
        user_id: &str,
        session_id: &str,
    ) -> Result<()> {
        self.query(
            engine,
            "async_delete_session",
            json!({ "user_id": user_id, "session_id": session_id }),
        )?;
        Ok(())
    }
}
