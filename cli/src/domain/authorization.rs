//! Agentspace OAuth authorization resources.

use serde::Serialize;

use crate::domain::config::CreateAuthorizationConfig;
use crate::domain::resource::encode_query_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResource {
    pub name: String,
    pub server_side_oauth2: ServerSideOauth2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideOauth2 {
    pub client_id: String,
    pub client_secret: String,
    pub authorization_uri: String,
    pub token_uri: String,
}

/// Authorization URI with `response_type=code` and any optional OAuth
/// parameters appended, in the order audience, prompt, scope.
#[must_use]
pub fn authorization_uri(config: &CreateAuthorizationConfig) -> String {
    let mut params = vec![("response_type", "code")];
    if let Some(audience) = config.oauth_audience.as_deref() {
        params.push(("audience", audience));
    }
    if let Some(prompt) = config.oauth_prompt.as_deref() {
        params.push(("prompt", prompt));
    }
    if let Some(scope) = config.oauth_scopes.as_deref() {
        params.push(("scope", scope));
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={}", encode_query_value(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if config.oauth_auth_uri.contains('?') { '&' } else { '?' };
    format!("{}{separator}{query}", config.oauth_auth_uri)
}

/// Create payload. Contains the client secret; never print it unmasked.
#[must_use]
pub fn authorization_payload(config: &CreateAuthorizationConfig) -> AuthorizationResource {
    AuthorizationResource {
        name: config.resource_name(),
        server_side_oauth2: ServerSideOauth2 {
            client_id: config.oauth_client_id.expose().to_string(),
            client_secret: config.oauth_client_secret.expose().to_string(),
            authorization_uri: authorization_uri(config),
            token_uri: config.oauth_token_uri.clone(),
        },
    }
}

/// Create URL: collection plus `authorizationId`.
#[must_use]
pub fn create_url(config: &CreateAuthorizationConfig) -> String {
    format!(
        "{}?authorizationId={}",
        config.collection_url(),
        encode_query_value(&config.auth_id)
    )
}
