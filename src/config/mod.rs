//! Configuration management for Feedmill.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Feedmill uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`FEEDMILL_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use feedmill::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("feedmill.toml")?;
//!
//! // Access configuration sections
//! println!("Catalog: {}", config.catalog.path);
//! println!("Category: {}", config.export.product_category);
//! println!("Staging: {}", config.staging.directory);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`CatalogConfig`] - Catalog store kind and location
//! - [`ExportConfig`] - Export settings (category, record limit)
//! - [`StagingConfig`] - Staging directory and artifact names
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [catalog]
//! source = "json"
//! path = "data/catalog.json"
//!
//! [export]
//! product_category = "mens-shirts"
//! record_limit = 10
//!
//! [staging]
//! directory = "staging"
//! tabular_file = "csvProducts.csv"
//! tree_file = "csvProducts.xml"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export CATALOG_DUMP_PATH="/srv/feeds/catalog.json"
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use feedmill::config::load_config;
//!
//! # fn example() {
//! match load_config("feedmill.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CatalogConfig, ExportConfig, FeedmillConfig, LoggingConfig, StagingConfig,
};
