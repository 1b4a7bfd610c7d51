//! Validate and generate against a checkout on disk

use hassfest::application::STALE_FILE;
use hassfest::domain::ports::IntegrationRepository;
use hassfest::infrastructure::{FsIntegrationRepository, LocalFs};
use hassfest::presentation::create_run_use_case;
use hassfest::{Action, Config, GenerateUseCase, HassfestError, ValidateUseCase};

use crate::common::{TestEnv, ZEROCONF_FLOW};

fn acme_env() -> TestEnv {
    TestEnv::new()
        .with_zeroconf("acme", &["_acme._tcp.local."])
        .with_config_flow("acme", ZEROCONF_FLOW)
}

fn config(env: &TestEnv, action: Action) -> Config {
    Config {
        action,
        ..Config::for_root(env.root())
    }
}

#[test]
fn stale_file_is_fixable_and_carries_fresh_content() {
    let env = acme_env().with_generated("SERVICE_TYPES = {}\n");
    let set = FsIntegrationRepository::new(LocalFs::new())
        .load_all(&env.components_dir())
        .unwrap();

    let outcome = ValidateUseCase::new(LocalFs::new(), env.generated_path())
        .execute(&set.integrations)
        .unwrap();

    assert!(outcome.is_stale());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].message, STALE_FILE);
    assert!(outcome.errors[0].fixable);
    assert_eq!(outcome.errors[0].domain, None);
    assert!(outcome.file.content().contains("\"_acme._tcp.local.\""));

    GenerateUseCase::new(LocalFs::new())
        .execute(&outcome.file)
        .unwrap();

    assert_eq!(env.generated(), format!("{}\n", outcome.file.content()));
}

#[test]
fn generate_then_validate_is_clean() {
    let env = acme_env().with_generated("");

    let report = create_run_use_case(config(&env, Action::Generate))
        .execute()
        .unwrap();
    assert!(report.is_success());
    assert_eq!(report.generated.as_deref(), Some(env.generated_path().as_path()));

    let report = create_run_use_case(config(&env, Action::Validate))
        .execute()
        .unwrap();
    assert!(report.is_success());
    assert!(report.errors.is_empty());
    assert!(report.drift.is_none());
}

#[test]
fn generate_is_idempotent() {
    let env = acme_env().with_generated("");

    create_run_use_case(config(&env, Action::Generate))
        .execute()
        .unwrap();
    let first = env.generated();

    create_run_use_case(config(&env, Action::Generate))
        .execute()
        .unwrap();

    assert_eq!(env.generated(), first);
}

#[test]
fn surrounding_whitespace_is_not_drift() {
    let env = acme_env().with_generated("");
    create_run_use_case(config(&env, Action::Generate))
        .execute()
        .unwrap();
    let padded = format!("\n\n{}\n\n\n", env.generated());
    let env = env.with_generated(&padded);

    let report = create_run_use_case(config(&env, Action::Validate))
        .execute()
        .unwrap();

    assert!(report.is_success());
}

#[test]
fn missing_generated_file_is_fatal() {
    let env = acme_env();

    let err = create_run_use_case(config(&env, Action::Validate))
        .execute()
        .unwrap_err();

    assert!(matches!(err, HassfestError::GeneratedFileUnreadable { .. }));
}

#[test]
fn missing_components_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = create_run_use_case(Config::for_root(dir.path()))
        .execute()
        .unwrap_err();

    assert!(matches!(err, HassfestError::ComponentsDirNotFound { .. }));
}

#[test]
fn generate_refuses_when_integrations_are_invalid() {
    let env = acme_env()
        .with_zeroconf("bad", &["_bad._tcp.local."])
        .with_generated("stale");

    let report = create_run_use_case(config(&env, Action::Generate))
        .execute()
        .unwrap();

    assert!(!report.is_success());
    assert!(report.generated.is_none());
    assert_eq!(env.generated(), "stale");
}
