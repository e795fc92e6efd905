//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use feedmill::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("FEEDMILL_APPLICATION_LOG_LEVEL");
    std::env::remove_var("FEEDMILL_EXPORT_PRODUCT_CATEGORY");
    std::env::remove_var("FEEDMILL_EXPORT_RECORD_LIMIT");
    std::env::remove_var("FEEDMILL_STAGING_DIRECTORY");
    std::env::remove_var("TEST_FEED_CATALOG_PATH");
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let toml_content = r#"
[application]
log_level = "debug"
dry_run = true

[catalog]
source = "json"
path = "data/catalog.json"

[export]
product_category = "mens-shirts"
record_limit = 25

[staging]
directory = "out"
tabular_file = "products.csv"
tree_file = "products.xml"
intermediate = "memory"

[logging]
local_enabled = false
local_path = "/tmp/feedmill"
local_rotation = "size"
local_max_size_mb = 50
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);

    // Verify catalog config
    assert_eq!(config.catalog.source, "json");
    assert_eq!(config.catalog.path, "data/catalog.json");

    // Verify export config
    assert_eq!(config.export.product_category, "mens-shirts");
    assert_eq!(config.export.record_limit, 25);

    // Verify staging config
    assert_eq!(config.staging.directory, "out");
    assert_eq!(config.staging.tabular_file, "products.csv");
    assert_eq!(config.staging.tree_file, "products.xml");
    assert_eq!(config.staging.intermediate, "memory");

    // Verify logging config
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/feedmill");
    assert_eq!(config.logging.local_rotation, "size");
    assert_eq!(config.logging.local_max_size_mb, 50);
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]

[catalog]
path = "catalog.json"

[export]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.catalog.source, "json");
    assert_eq!(config.export.product_category, "");
    assert_eq!(config.export.record_limit, 10);
    assert_eq!(config.staging.directory, "staging");
    assert_eq!(config.staging.tabular_file, "csvProducts.csv");
    assert_eq!(config.staging.tree_file, "csvProducts.xml");
    assert_eq!(config.staging.intermediate, "file");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_FEED_CATALOG_PATH", "/srv/dumps/catalog.json");

    let toml_content = r#"
[application]

[catalog]
path = "${TEST_FEED_CATALOG_PATH}"

[export]
product_category = "books"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.catalog.path, "/srv/dumps/catalog.json");

    std::env::remove_var("TEST_FEED_CATALOG_PATH");
}

#[test]
fn test_missing_env_var_fails_with_its_name() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]

[catalog]
path = "${TEST_FEED_CATALOG_PATH}"

[export]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_FEED_CATALOG_PATH"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("FEEDMILL_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("FEEDMILL_EXPORT_PRODUCT_CATEGORY", "kitchen");
    std::env::set_var("FEEDMILL_EXPORT_RECORD_LIMIT", "50");

    let toml_content = r#"
[application]
log_level = "info"

[catalog]
path = "catalog.json"

[export]
product_category = "books"
record_limit = 10
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.export.product_category, "kitchen");
    assert_eq!(config.export.record_limit, 50);

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "invalid_level"

[catalog]
path = "catalog.json"

[export]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_equal_staging_file_names_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]

[catalog]
path = "catalog.json"

[export]

[staging]
tabular_file = "feed.out"
tree_file = "feed.out"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_missing_config_file() {
    let result = load_config("/nonexistent/path/feedmill.toml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration file not found"));
}
