//! Configuration schema types
//!
//! This module defines the configuration structure for Feedmill.

use serde::{Deserialize, Serialize};

/// Main Feedmill configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedmillConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Catalog store configuration
    pub catalog: CatalogConfig,

    /// Export settings
    pub export: ExportConfig,

    /// Staging area configuration
    #[serde(default)]
    pub staging: StagingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FeedmillConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.catalog.validate()?;
        self.export.validate()?;
        self.staging.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (select products but write no files)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Catalog store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Store kind (currently only "json")
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// Path of the catalog dump file
    pub path: String,
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_sources = ["json"];
        if !valid_sources.contains(&self.source.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid catalog.source '{}'. Must be one of: {}",
                self.source,
                valid_sources.join(", ")
            ));
        }

        if self.path.is_empty() {
            return Err("catalog.path cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Category to export products from
    ///
    /// Leaving this empty turns the export into a deliberate no-op: the job
    /// finishes successfully without touching the staging area.
    #[serde(default)]
    pub product_category: String,

    /// Maximum number of products to export per run
    #[serde(default = "default_record_limit")]
    pub record_limit: usize,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.record_limit) {
            return Err(format!(
                "export.record_limit must be between 1 and 1000, got {}",
                self.record_limit
            ));
        }
        Ok(())
    }
}

/// Staging area configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Directory the export artifacts are written to
    #[serde(default = "default_staging_directory")]
    pub directory: String,

    /// File name of the tabular artifact
    #[serde(default = "default_tabular_file")]
    pub tabular_file: String,

    /// File name of the tree artifact
    #[serde(default = "default_tree_file")]
    pub tree_file: String,

    /// Intermediate representation between the two encoders
    ///
    /// "file" stages the tabular artifact on disk and reads it back; this is
    /// the default and keeps the CSV around for inspection. "memory" pipes
    /// the rows through an in-memory buffer and writes only the tree
    /// artifact.
    #[serde(default = "default_intermediate")]
    pub intermediate: String,
}

impl StagingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.is_empty() {
            return Err("staging.directory cannot be empty".to_string());
        }

        if self.tabular_file.is_empty() {
            return Err("staging.tabular_file cannot be empty".to_string());
        }

        if self.tree_file.is_empty() {
            return Err("staging.tree_file cannot be empty".to_string());
        }

        if self.tabular_file == self.tree_file {
            return Err("staging.tabular_file and staging.tree_file must differ".to_string());
        }

        let valid_intermediates = ["file", "memory"];
        if !valid_intermediates.contains(&self.intermediate.as_str()) {
            return Err(format!(
                "Invalid staging.intermediate '{}'. Must be one of: {}",
                self.intermediate,
                valid_intermediates.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            directory: default_staging_directory(),
            tabular_file: default_tabular_file(),
            tree_file: default_tree_file(),
            intermediate: default_intermediate(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_catalog_source() -> String {
    "json".to_string()
}

fn default_record_limit() -> usize {
    10
}

fn default_staging_directory() -> String {
    "staging".to_string()
}

fn default_tabular_file() -> String {
    "csvProducts.csv".to_string()
}

fn default_tree_file() -> String {
    "csvProducts.xml".to_string()
}

fn default_intermediate() -> String {
    "file".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
