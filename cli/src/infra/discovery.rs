//! Discovery Engine (Agentspace) adapter for agents and authorizations.

use anyhow::Result;
use serde_json::Value;

use crate::application::ports::{AuthorizationApi, DirectoryApi};
use crate::domain::authorization::AuthorizationResource;
use crate::domain::registry::{AgentListPage, AgentRecord};
use crate::domain::resource::encode_query_value;
use crate::infra::http::GoogleClient;

pub struct DiscoveryClient {
    http: GoogleClient,
}

impl DiscoveryClient {
    /// `http` should carry the quota project; Discovery Engine requires it
    /// for user credentials.
    #[must_use]
    pub fn new(http: GoogleClient) -> Self {
        Self { http }
    }
}

impl DirectoryApi for DiscoveryClient {
    fn list_page(&self, endpoint: &str, page_token: Option<&str>) -> Result<AgentListPage> {
        let url = match page_token {
            Some(token) => format!("{endpoint}?pageToken={}", encode_query_value(token)),
            None => endpoint.to_string(),
        };
        Ok(self.http.get_json(&url)?)
    }

    fn create_record(&self, endpoint: &str, record: &AgentRecord) -> Result<AgentRecord> {
        Ok(self.http.send_json("POST", endpoint, record)?)
    }

    fn update_record(
        &self,
        endpoint: &str,
        registration_id: &str,
        record: &AgentRecord,
    ) -> Result<AgentRecord> {
        Ok(self
            .http
            .send_json("PATCH", &format!("{endpoint}/{registration_id}"), record)?)
    }

    fn delete_record(&self, endpoint: &str, registration_id: &str) -> Result<()> {
        self.http.delete(&format!("{endpoint}/{registration_id}"))?;
        Ok(())
    }
}

impl AuthorizationApi for DiscoveryClient {
    fn create_authorization(&self, url: &str, body: &AuthorizationResource) -> Result<Value> {
        Ok(self.http.send_json("POST", url, body)?)
    }

    fn delete_authorization(&self, url: &str) -> Result<()> {
        self.http.delete(url)?;
        Ok(())
    }
}
