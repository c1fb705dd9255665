//! Tests for configuration loading
//!
//! Environment override tests mutate process environment variables and
//! must run sequentially:
//!
//! ```bash
//! cargo test -p pkgcheck-infrastructure --test unit config -- --test-threads=1 --ignored
//! ```

use pkgcheck_infrastructure::{AppConfig, ConfigLoader, ReportFormat};
use pkgcheck_domain::Severity;
use std::env;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("pkgcheck.toml");
    fs::write(&path, content).unwrap();
    path
}

fn loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_env_prefix("PKGCHECK_UNIT_TEST")
        .without_default_search()
}

#[test]
fn test_defaults_without_file() {
    let config = loader().load().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.checks.len(), 1);
    assert_eq!(config.checks[0].implementation, "ac_handling");
    assert_eq!(config.report.fail_on_severity().unwrap(), Severity::Major);
    assert_eq!(config.report.format, ReportFormat::Human);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"

[schema]
documents = ["file:///schemas/base.cnd"]
directories = ["schemas"]

[report]
format = "json"
fail_on = "severe"

[[checks]]
name = "acl"
impl = "ac_handling"
config = { levelSet = "no_clear" }

[[checks]]
impl = "ac_handling"
skip = true
"#,
    );

    let config = loader().with_config_path(&path).load().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.report.format, ReportFormat::Json);
    assert_eq!(config.report.fail_on_severity().unwrap(), Severity::Severe);
    assert_eq!(config.schema.document_refs().unwrap().len(), 1);
    assert_eq!(config.checks.len(), 2);
    assert_eq!(config.checks[0].label(), "acl");
    assert_eq!(config.checks[0].config["levelSet"], "no_clear");
    assert!(config.checks[1].skip);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = loader()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("configuration file not found"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "[report]\nfail_on = \"fatal\"\n");
    assert!(loader().with_config_path(&path).load().is_err());

    let path = write_config(&dir, "[logging]\nlevel = \"chatty\"\n");
    assert!(loader().with_config_path(&path).load().is_err());

    let path = write_config(&dir, "[[checks]]\nimpl = \" \"\n");
    assert!(loader().with_config_path(&path).load().is_err());

    let path = write_config(&dir, "[schema]\ndocuments = [\"http://[bad\"]\n");
    assert!(loader().with_config_path(&path).load().is_err());

    let path = write_config(&dir, "[report]\nformat = \"xml\"\n");
    assert!(loader().with_config_path(&path).load().is_err());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.report.fail_on = "minor".to_string();
    config.schema.post_install.push("file:///schemas/late.cnd".to_string());

    loader().save_to_file(&config, &path).unwrap();
    let loaded = loader().with_config_path(&path).load().unwrap();

    assert_eq!(loaded, config);
}

/// Helper to set env var
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[report]\nfail_on = \"severe\"\n");
    set_env("PKGCHECK_UNIT_TEST_REPORT__FAIL_ON", "minor");
    set_env("PKGCHECK_UNIT_TEST_LOG", "trace");

    let config = loader().with_config_path(&path).load();

    remove_env("PKGCHECK_UNIT_TEST_REPORT__FAIL_ON");
    remove_env("PKGCHECK_UNIT_TEST_LOG");
    assert_eq!(config.unwrap().report.fail_on, "minor");
}
