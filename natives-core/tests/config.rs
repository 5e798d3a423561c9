use std::env;

use natives_core::{
    config::Config,
    constants::EnvVar,
    logging, AttributeResolver, Category, UnknownAttributePolicy,
};
use serial_test::serial;

const SHIPPED_CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config");
const FIXTURE_CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const POLICY_OVERRIDE: &str = "NATIVES_RESOLVER__UNKNOWN_ATTRIBUTE_POLICY";

#[test]
#[serial]
fn loads_shipped_defaults() -> anyhow::Result<()> {
    let config = Config::from_dir("development", SHIPPED_CONFIG_DIR)?;

    assert_eq!(
        UnknownAttributePolicy::Ignore,
        config.resolver.unknown_attribute_policy
    );
    assert!(config.resolver.category_policies.is_empty());

    Ok(())
}

#[test]
#[serial]
fn run_mode_overlays_the_defaults() -> anyhow::Result<()> {
    let config = Config::from_dir("strict", FIXTURE_CONFIG_DIR)?;
    let resolver = AttributeResolver::new(&config.resolver);

    assert_eq!(UnknownAttributePolicy::Reject, resolver.policy(Category::Job));
    assert_eq!(
        UnknownAttributePolicy::Ignore,
        resolver.policy(Category::NodeAttribute)
    );
    assert_eq!(UnknownAttributePolicy::Warn, resolver.policy(Category::Vm));

    Ok(())
}

#[test]
#[serial]
fn missing_run_mode_file_is_optional() -> anyhow::Result<()> {
    let config = Config::from_dir("production", FIXTURE_CONFIG_DIR)?;

    assert_eq!(
        UnknownAttributePolicy::Warn,
        config.resolver.unknown_attribute_policy
    );

    Ok(())
}

#[test]
#[serial]
fn missing_default_file_is_an_error() {
    assert!(Config::from_dir("development", "/nonexistent/natives/config").is_err());
}

#[test]
#[serial]
fn environment_overrides_files() -> anyhow::Result<()> {
    env::set_var(POLICY_OVERRIDE, "reject");
    let config = Config::from_dir("development", SHIPPED_CONFIG_DIR);
    env::remove_var(POLICY_OVERRIDE);

    assert_eq!(
        UnknownAttributePolicy::Reject,
        config?.resolver.unknown_attribute_policy
    );

    Ok(())
}

#[test]
#[serial]
fn config_dir_and_run_mode_come_from_the_environment() -> anyhow::Result<()> {
    env::set_var(EnvVar::ConfigDir.to_string(), FIXTURE_CONFIG_DIR);
    env::set_var(EnvVar::RunMode.to_string(), "strict");
    let config = Config::new();
    env::remove_var(EnvVar::RunMode.to_string());
    env::remove_var(EnvVar::ConfigDir.to_string());

    let config = config?;

    assert_eq!(
        Some(&UnknownAttributePolicy::Reject),
        config.resolver.category_policies.get(&Category::Job)
    );

    Ok(())
}

#[test]
#[serial]
fn logging_initializes_from_the_config_dir() -> anyhow::Result<()> {
    env::set_var(EnvVar::ConfigDir.to_string(), SHIPPED_CONFIG_DIR);
    let result = logging::setup_logging();
    env::remove_var(EnvVar::ConfigDir.to_string());

    result?;

    AttributeResolver::default().resolve(Category::Vm, "not-a-real-token")?;

    Ok(())
}
