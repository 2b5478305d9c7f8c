//! Application service: Agentspace registration use-cases.
//!
//! Records are matched by embedded engine id. Register is idempotent,
//! update resends the whole record, unregister requires explicit consent.

use std::collections::HashSet;

use anyhow::Result;

use crate::application::ports::{CommandRunner, Confirmer, DirectoryApi, ProgressReporter};
use crate::application::services::credentials;
use crate::domain::registry::{self, AgentRecord, Drift};
use crate::domain::resource::authorization_name;
use crate::domain::{ApiError, OAuthSetup, RegisterConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A record for this engine exists; nothing was written.
    AlreadyRegistered {
        record: AgentRecord,
        drift: Vec<Drift>,
    },
    Registered(AgentRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterOutcome {
    NotRegistered,
    Cancelled,
    Unregistered { registration_id: String },
}

/// Fetch every record under `endpoint`, following page tokens.
///
/// # Errors
///
/// Returns an error if any page request fails, or an [`ApiError::Decode`]
/// if the service hands back a page token it already returned.
pub fn list_registrations(api: &impl DirectoryApi, endpoint: &str) -> Result<Vec<AgentRecord>> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut token: Option<String> = None;
    loop {
        let page = api.list_page(endpoint, token.as_deref())?;
        records.extend(page.agents);
        let Some(next) = page.next_page_token.filter(|t| !t.is_empty()) else {
            break;
        };
        if !seen.insert(next.clone()) {
            return Err(ApiError::Decode {
                url: endpoint.to_string(),
                reason: format!("page token '{next}' was already returned"),
            }
            .into());
        }
        token = Some(next);
    }
    tracing::debug!(count = records.len(), pages = seen.len() + 1, "listed registrations");
    Ok(records)
}

fn fetch(
    config: &RegisterConfig,
    api: &impl DirectoryApi,
    reporter: &impl ProgressReporter,
) -> Result<Vec<AgentRecord>> {
    reporter.wait("getting agent registrations...", || {
        list_registrations(api, &config.endpoint())
    })
}

/// Authorization reference to attach, if OAuth is fully configured.
///
/// Partial configuration and project number lookup failures degrade to a
/// warning; registration proceeds without the reference.
pub fn authorization_reference(
    config: &RegisterConfig,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Option<String> {
    match config.oauth_setup() {
        OAuthSetup::Disabled => {
            tracing::debug!("OAuth not configured, agent uses service account authentication");
            None
        }
        OAuthSetup::Partial { missing } => {
            reporter.warn(&format!(
                "OAuth partially configured, missing {}; registering without an authorization",
                missing.join(", ")
            ));
            None
        }
        OAuthSetup::Complete {
            auth_id,
            auth_location,
        } => match credentials::project_number(runner, &config.base.project) {
            Ok(number) => {
                let path = authorization_name(&number, auth_location, &auth_id);
                reporter.step(&format!("using authorization {path}"));
                Some(path)
            }
            Err(e) => {
                reporter.warn(&format!(
                    "could not get project number ({e:#}); registering without an authorization"
                ));
                None
            }
        },
    }
}

/// Register the configured engine unless a record for it already exists.
///
/// # Errors
///
/// Returns an error if listing or creating fails.
pub fn register(
    config: &RegisterConfig,
    api: &impl DirectoryApi,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<RegisterOutcome> {
    let records = fetch(config, api, reporter)?;

    if let Some(existing) = registry::find_registration(&records, &config.engine_id) {
        let drift = registry::drift(existing, config);
        for d in &drift {
            reporter.warn(&format!(
                "registered {} is '{}' but configured '{}'; run update-registration to apply",
                d.field, d.stored, d.configured
            ));
        }
        reporter.success(&format!(
            "agent engine {} is already registered, skipping",
            config.engine_id
        ));
        return Ok(RegisterOutcome::AlreadyRegistered {
            record: existing.clone(),
            drift,
        });
    }

    let payload = registry::registration_payload(
        config,
        authorization_reference(config, runner, reporter),
    );
    let created = reporter.wait(
        &format!("registering agent '{}'...", config.display_name),
        || api.create_record(&config.endpoint(), &payload),
    )?;
    tracing::info!(registration = %created.registration_id(), "agent registered");
    reporter.success(&format!("agent '{}' registered", config.display_name));
    Ok(RegisterOutcome::Registered(created))
}

/// Replace the existing record for the configured engine with the full payload.
///
/// # Errors
///
/// Returns an error if the engine is not registered or the update fails.
pub fn update_registration(
    config: &RegisterConfig,
    api: &impl DirectoryApi,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> Result<AgentRecord> {
    let records = fetch(config, api, reporter)?;
    let Some(existing) = registry::find_registration(&records, &config.engine_id) else {
        anyhow::bail!(
            "agent engine {} is not registered with app {}. Register it first: agent-engine register",
            config.engine_id,
            config.app_id
        );
    };
    let registration_id = existing.registration_id().to_string();

    let payload = registry::registration_payload(
        config,
        authorization_reference(config, runner, reporter),
    );
    let updated = reporter.wait(
        &format!("updating registration {registration_id}..."),
        || api.update_record(&config.endpoint(), &registration_id, &payload),
    )?;
    reporter.success(&format!("registration {registration_id} updated"));
    Ok(updated)
}

/// Remove the record for the configured engine after explicit consent.
///
/// # Errors
///
/// Returns an error if listing fails, no terminal is available to confirm,
/// or the delete call fails.
pub fn unregister(
    config: &RegisterConfig,
    api: &impl DirectoryApi,
    confirmer: &impl Confirmer,
    reporter: &impl ProgressReporter,
) -> Result<UnregisterOutcome> {
    let records = fetch(config, api, reporter)?;
    let Some(existing) = registry::find_registration(&records, &config.engine_id) else {
        reporter.warn(&format!(
            "agent engine {} is not currently registered with app {}",
            config.engine_id, config.app_id
        ));
        return Ok(UnregisterOutcome::NotRegistered);
    };
    let registration_id = existing.registration_id().to_string();

    let prompt = format!(
        "Unregister agent '{}' with Agent Engine ID '{}' from app '{}'?",
        existing.display_name, config.engine_id, config.app_id
    );
    if !confirmer.confirm(&prompt)? {
        reporter.warn("unregister cancelled");
        return Ok(UnregisterOutcome::Cancelled);
    }

    reporter.wait(&format!("unregistering {registration_id}..."), || {
        api.delete_record(&config.endpoint(), &registration_id)
    })?;
    reporter.success(&format!("agent engine {} unregistered", config.engine_id));
    Ok(UnregisterOutcome::Unregistered { registration_id })
}
