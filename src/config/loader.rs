//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FeedmillConfig;
use crate::domain::errors::FeedmillError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FeedmillConfig
/// 4. Applies environment variable overrides (FEEDMILL_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use feedmill::config::loader::load_config;
///
/// let config = load_config("feedmill.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FeedmillConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(FeedmillError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        FeedmillError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: FeedmillConfig = toml::from_str(&contents)
        .map_err(|e| FeedmillError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        FeedmillError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched, so a commented-out `${EXAMPLE}` never
/// counts as a missing variable.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FeedmillError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the FEEDMILL_* prefix
///
/// Environment variables follow the pattern: FEEDMILL_<SECTION>_<KEY>
/// For example: FEEDMILL_EXPORT_PRODUCT_CATEGORY, FEEDMILL_STAGING_DIRECTORY
fn apply_env_overrides(config: &mut FeedmillConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("FEEDMILL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Catalog overrides
    if let Ok(val) = std::env::var("FEEDMILL_CATALOG_SOURCE") {
        config.catalog.source = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_CATALOG_PATH") {
        config.catalog.path = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("FEEDMILL_EXPORT_PRODUCT_CATEGORY") {
        config.export.product_category = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_EXPORT_RECORD_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.export.record_limit = limit;
        }
    }

    // Staging overrides
    if let Ok(val) = std::env::var("FEEDMILL_STAGING_DIRECTORY") {
        config.staging.directory = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_STAGING_TABULAR_FILE") {
        config.staging.tabular_file = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_STAGING_TREE_FILE") {
        config.staging.tree_file = val;
    }
    if let Ok(val) = std::env::var("FEEDMILL_STAGING_INTERMEDIATE") {
        config.staging.intermediate = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FEEDMILL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("FEEDMILL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
