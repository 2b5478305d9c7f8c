//! Property-based tests for normalization, validation and resource naming.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use agent_engine_cli::domain::error::ConfigError;
use agent_engine_cli::domain::resource::{DirectoryLocation, ReasoningEngineName, directory_agents_url};
use agent_engine_cli::domain::{DeployConfig, EngineParent, EnvSnapshot, RegisterConfig, validate};
use proptest::prelude::*;

use crate::helpers::env;

const DEPLOY_REQUIRED: [&str; 4] = [
    "GOOGLE_CLOUD_PROJECT",
    "GOOGLE_CLOUD_LOCATION",
    "AGENT_NAME",
    "GOOGLE_CLOUD_STORAGE_BUCKET",
];

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

proptest! {
    /// A variable is set exactly when its value is non-empty.
    #[test]
    fn prop_empty_values_are_absent(value in "[a-z ]{0,3}", key in "[A-Z_]{1,12}") {
        let snapshot = env(&[(key.as_str(), value.as_str())]);
        prop_assert_eq!(snapshot.is_set(&key), !value.is_empty());
        prop_assert_eq!(snapshot.get(&key).is_some(), !value.is_empty());
    }

    /// The process environment wins over the file for every key.
    #[test]
    fn prop_process_overrides_file(key in "[A-Z]{1,8}", file in "[a-z]{1,8}", process in "[a-z]{1,8}") {
        let snapshot = EnvSnapshot::layered(
            vec![(key.clone(), file)],
            vec![(key.clone(), process.clone())],
        );
        prop_assert_eq!(snapshot.get(&key), Some(process.as_str()));
    }

    /// Every blanked required deploy variable is named in the error.
    #[test]
    fn prop_every_missing_required_variable_is_reported(mask in 1u8..16) {
        let pairs: Vec<(&str, &str)> = DEPLOY_REQUIRED
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, if mask & (1 << i) == 0 { "value" } else { "" }))
            .collect();
        let err = validate::<DeployConfig>(&env(&pairs)).expect_err("must fail");
        let ConfigError::Invalid { violations, .. } = &err else {
            panic!("expected invalid config");
        };
        let reported = err.variables();
        for (i, key) in DEPLOY_REQUIRED.iter().enumerate() {
            let missing = mask & (1 << i) != 0;
            prop_assert_eq!(reported.contains(key), missing, "{}", key);
        }
        prop_assert_eq!(violations.len(), reported.len());
    }

    /// Create vs update depends on AGENT_ENGINE_ID alone.
    #[test]
    fn prop_engine_id_alone_selects_update(
        display in "[A-Za-z ]{0,12}",
        dir in "[a-z-]{0,12}",
        engine_id in proptest::option::of("[0-9]{1,19}"),
    ) {
        let mut pairs = vec![
            ("GOOGLE_CLOUD_PROJECT", "p1"),
            ("GOOGLE_CLOUD_LOCATION", "us-central1"),
            ("AGENT_NAME", "demo"),
            ("GOOGLE_CLOUD_STORAGE_BUCKET", "b1"),
            ("AGENT_DISPLAY_NAME", display.as_str()),
            ("GCS_DIR_NAME", dir.as_str()),
        ];
        if let Some(id) = engine_id.as_deref() {
            pairs.push(("AGENT_ENGINE_ID", id));
        }
        let config = validate::<DeployConfig>(&env(&pairs)).expect("valid");
        let plan = agent_engine_cli::domain::deploy::plan(&config);
        prop_assert_eq!(plan.is_update(), engine_id.is_some());
    }

    /// Engine names survive formatting and parsing.
    #[test]
    fn prop_engine_name_parses_its_own_display(
        project in segment(),
        location in segment(),
        id in "[0-9]{1,19}",
    ) {
        let name = EngineParent::new(&project, &location).engine(&id);
        prop_assert_eq!(ReasoningEngineName::parse(&name.to_string()), Some(name));
    }

    /// Only global, us and eu are accepted as directory app locations.
    #[test]
    fn prop_unknown_app_location_rejected(location in "[a-z]{1,10}") {
        prop_assume!(!["global", "us", "eu"].contains(&location.as_str()));
        let pairs = [
            ("GOOGLE_CLOUD_PROJECT", "p1"),
            ("GOOGLE_CLOUD_LOCATION", "us-central1"),
            ("AGENT_NAME", "demo"),
            ("AGENT_ENGINE_ID", "123"),
            ("AGENTSPACE_APP_ID", "app"),
            ("AGENTSPACE_APP_LOCATION", location.as_str()),
        ];
        let err = validate::<RegisterConfig>(&env(&pairs)).expect_err("must fail");
        prop_assert_eq!(err.variables(), vec!["AGENTSPACE_APP_LOCATION"]);
    }
}

#[test]
fn test_directory_endpoint_maps_each_location_to_one_host() {
    let hosts: Vec<String> = [DirectoryLocation::Global, DirectoryLocation::Us, DirectoryLocation::Eu]
        .into_iter()
        .map(|loc| directory_agents_url(loc, "v1alpha", "p1", "app"))
        .collect();
    assert!(hosts[0].starts_with("https://discoveryengine.googleapis.com/v1alpha/"));
    assert!(hosts[1].starts_with("https://us-discoveryengine.googleapis.com/v1alpha/"));
    assert!(hosts[2].starts_with("https://eu-discoveryengine.googleapis.com/v1alpha/"));
}
