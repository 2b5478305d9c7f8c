//! Authenticated JSON client for Google REST APIs.
//!
//! Every call is blocking and made exactly once; failures are mapped to
//! [`ApiError`] with the response body preserved verbatim.

use std::io::{BufRead as _, BufReader};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{ApiError, Secret};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Bearer-authenticated client. Cheap to clone.
#[derive(Clone)]
pub struct GoogleClient {
    agent: ureq::Agent,
    token: Secret,
    quota_project: Option<String>,
}

impl GoogleClient {
    #[must_use]
    pub fn new(token: Secret) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(REQUEST_TIMEOUT)
            .user_agent(concat!("agent-engine-cli/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            token,
            quota_project: None,
        }
    }

    /// Bill requests to `project` (`X-Goog-User-Project`).
    #[must_use]
    pub fn with_quota_project(mut self, project: &str) -> Self {
        self.quota_project = Some(project.to_string());
        self
    }

    fn request(&self, method: &'static str, url: &str) -> ureq::Request {
        tracing::debug!(method, url, "request");
        let request = self
            .agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token.expose()))
            .set("Content-Type", "application/json");
        match &self.quota_project {
            Some(project) => request.set("X-Goog-User-Project", project),
            None => request,
        }
    }

    /// GET and decode.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx, or undecodable body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = check("GET", url, self.request("GET", url).call())?;
        decode(url, response)
    }

    /// Send a JSON body and decode the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx, or undecodable body.
    pub fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = check(method, url, self.request(method, url).send_json(body))?;
        decode(url, response)
    }

    /// Upload raw bytes and decode the response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx, or undecodable body.
    pub fn send_bytes<T: DeserializeOwned>(
        &self,
        url: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<T, ApiError> {
        let request = self.request("POST", url).set("Content-Type", content_type);
        let response = check("POST", url, request.send_bytes(bytes))?;
        decode(url, response)
    }

    /// DELETE; returns the decoded body, or `Value::Null` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx.
    pub fn delete(&self, url: &str) -> Result<Value, ApiError> {
        let response = check("DELETE", url, self.request("DELETE", url).call())?;
        let body = response.into_string().map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// POST a JSON body and feed each non-empty response line to `on_line`
    /// as it arrives.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx, or a broken stream.
    pub fn stream_lines<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        on_line: &mut dyn FnMut(&str) -> Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        let response = check("POST", url, self.request("POST", url).send_json(body))?;
        let reader = BufReader::new(response.into_reader());
        for line in reader.lines() {
            let line = line.map_err(|e| ApiError::Transport {
                method: "POST",
                url: url.to_string(),
                reason: e.to_string(),
            })?;
            let line = line.trim();
            if !line.is_empty() {
                on_line(line)?;
            }
        }
        Ok(())
    }
}

fn check(
    method: &'static str,
    url: &str,
    result: Result<ureq::Response, ureq::Error>,
) -> Result<ureq::Response, ApiError> {
    match result {
        Ok(response) => {
            tracing::debug!(method, url, status = response.status(), "response");
            Ok(response)
        }
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            tracing::debug!(method, url, status, "error response");
            Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
                body,
            })
        }
        Err(ureq::Error::Transport(transport)) => Err(ApiError::Transport {
            method,
            url: url.to_string(),
            reason: transport.to_string(),
        }),
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: ureq::Response) -> Result<T, ApiError> {
    response.into_json().map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
