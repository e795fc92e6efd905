//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Feedmill configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means
        // the file passed every schema check.
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid:");
                println!("   {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("  Log level:     {}", config.application.log_level);
        println!("  Catalog:       {} ({})", config.catalog.path, config.catalog.source);
        let category = if config.export.product_category.trim().is_empty() {
            "(none - export will no-op)"
        } else {
            config.export.product_category.as_str()
        };
        println!("  Category:      {category}");
        println!("  Record limit:  {}", config.export.record_limit);
        println!("  Staging:       {}", config.staging.directory);
        println!("  Tabular file:  {}", config.staging.tabular_file);
        println!("  Tree file:     {}", config.staging.tree_file);
        println!("  Intermediate:  {}", config.staging.intermediate);

        Ok(0)
    }
}
