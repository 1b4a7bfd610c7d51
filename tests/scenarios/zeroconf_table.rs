//! Building the service-type table from integrations on disk

use hassfest::domain::ports::IntegrationRepository;
use hassfest::domain::services::zeroconf::collect_service_types;
use hassfest::infrastructure::{FsIntegrationRepository, LocalFs};
use hassfest::IntegrationSet;

use crate::common::{TestEnv, USER_ONLY_FLOW, ZEROCONF_FLOW};

fn load(env: &TestEnv) -> IntegrationSet {
    FsIntegrationRepository::new(LocalFs::new())
        .load_all(&env.components_dir())
        .unwrap()
}

#[test]
fn single_integration_with_zeroconf_flow() {
    let env = TestEnv::new()
        .with_zeroconf("acme", &["_acme._tcp.local."])
        .with_config_flow("acme", ZEROCONF_FLOW);

    let collection = collect_service_types(&load(&env).integrations, &LocalFs::new()).unwrap();

    assert!(collection.errors.is_empty());
    assert_eq!(collection.table.len(), 1);
    assert_eq!(
        collection.table.get("_acme._tcp.local."),
        Some(&["acme".to_string()][..])
    );
}

#[test]
fn missing_config_flow_is_reported_and_excluded() {
    let env = TestEnv::new().with_zeroconf("bad", &["_bad._tcp.local."]);

    let collection = collect_service_types(&load(&env).integrations, &LocalFs::new()).unwrap();

    assert!(collection.table.is_empty());
    assert_eq!(collection.errors.len(), 1);
    assert_eq!(collection.errors[0].domain.as_deref(), Some("bad"));
    assert_eq!(collection.errors[0].plugin, "zeroconf");
    assert_eq!(
        collection.errors[0].message,
        "Zeroconf info in a manifest requires a config flow to exist"
    );
    assert!(!collection.errors[0].fixable);
}

#[test]
fn config_flow_without_zeroconf_step_is_reported() {
    let env = TestEnv::new()
        .with_zeroconf("acme", &["_acme._tcp.local."])
        .with_config_flow("acme", USER_ONLY_FLOW);

    let collection = collect_service_types(&load(&env).integrations, &LocalFs::new()).unwrap();

    assert!(collection.table.is_empty());
    assert_eq!(collection.errors.len(), 1);
    assert_eq!(
        collection.errors[0].message,
        "Config flow has no async_step_zeroconf"
    );
}

#[test]
fn shared_service_type_lists_domains_in_order() {
    let env = TestEnv::new()
        .with_zeroconf("y", &["_svc._tcp.local."])
        .with_config_flow("y", ZEROCONF_FLOW)
        .with_zeroconf("x", &["_svc._tcp.local."])
        .with_config_flow("x", ZEROCONF_FLOW);

    let collection = collect_service_types(&load(&env).integrations, &LocalFs::new()).unwrap();

    assert_eq!(
        collection.table.get("_svc._tcp.local."),
        Some(&["x".to_string(), "y".to_string()][..])
    );
}

#[test]
fn integrations_without_zeroconf_contribute_nothing() {
    let env = TestEnv::new()
        .with_manifest("plain", r#"{"domain": "plain", "name": "Plain"}"#)
        .with_manifest("empty", r#"{"domain": "empty", "zeroconf": []}"#)
        .with_zeroconf("acme", &["_acme._tcp.local."])
        .with_config_flow("acme", ZEROCONF_FLOW);

    let set = load(&env);
    assert_eq!(set.len(), 3);

    let collection = collect_service_types(&set.integrations, &LocalFs::new()).unwrap();

    assert!(collection.errors.is_empty());
    let keys: Vec<&str> = collection.table.service_types().collect();
    assert_eq!(keys, vec!["_acme._tcp.local."]);
}

#[test]
fn broken_manifest_is_a_loader_finding() {
    let env = TestEnv::new()
        .with_manifest("broken", "{ not json")
        .with_zeroconf("acme", &["_acme._tcp.local."])
        .with_config_flow("acme", ZEROCONF_FLOW);

    let set = load(&env);

    assert_eq!(set.errors.len(), 1);
    assert_eq!(set.errors[0].plugin, "model");
    assert_eq!(set.errors[0].domain.as_deref(), Some("broken"));
    assert!(set.errors[0]
        .message
        .starts_with("Manifest contains invalid JSON"));

    let collection = collect_service_types(&set.integrations, &LocalFs::new()).unwrap();
    assert_eq!(collection.table.len(), 1);
}
