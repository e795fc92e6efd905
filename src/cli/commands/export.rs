//! Export command implementation
//!
//! This module implements the `export` command: select products for the
//! configured category, stage them as CSV, and re-encode the CSV as catalog
//! XML.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - simulate export without writing staging files
    #[arg(long)]
    pub dry_run: bool,

    /// Override the product category to export
    #[arg(long)]
    pub category: Option<String>,

    /// Override the record limit
    #[arg(long)]
    pub limit: Option<usize>,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// Returns an exit code:
    /// - 0: success (or user-cancelled)
    /// - 1: export completed with failures
    /// - 2: configuration error
    /// - 4: catalog store unavailable
    /// - 5: fatal error
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(category) = &self.category {
            config.export.product_category = category.clone();
        }
        if let Some(limit) = self.limit {
            config.export.record_limit = limit;
        }
        if self.dry_run {
            config.application.dry_run = true;
        }

        // Re-validate after overrides
        if let Err(e) = config.validate() {
            eprintln!("❌ Configuration error: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No staging files will be written\n");
        }

        // Confirmation prompt (skipped with --yes or --dry-run)
        if !self.yes && !config.application.dry_run {
            println!("🚀 Feedmill Export");
            println!("  Category:     {}", display_category(&config.export.product_category));
            println!("  Record limit: {}", config.export.record_limit);
            println!("  Catalog:      {} ({})", config.catalog.path, config.catalog.source);
            println!(
                "  Staging:      {}/{{{}, {}}}",
                config.staging.directory, config.staging.tabular_file, config.staging.tree_file
            );
            print!("\nContinue? [y/N] ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Create the coordinator (opens the catalog store)
        let coordinator = match ExportCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to open catalog store: {e}");
                return Ok(4);
            }
        };

        // Execute export
        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Export failed: {e}");
                return Ok(5);
            }
        };

        // Print summary
        println!("\n📊 Export Summary");
        println!("  Run ID:            {}", summary.run_id);
        println!("  Category:          {}", display_category_opt(&summary.category));
        if summary.skipped {
            println!("  Skipped:           no product category configured");
        } else {
            println!("  Matched products:  {}", summary.matched_products);
            println!("  Selected products: {}", summary.selected_products);
            if summary.truncated() {
                println!("  ⚠️  Selection truncated to the record limit");
            }
            println!("  Rows written:      {}", summary.rows_written);
            println!("  Products encoded:  {}", summary.products_encoded);
            if let Some(path) = &summary.tabular_path {
                println!("  Tabular file:      {}", path.display());
            }
            if let Some(path) = &summary.tree_path {
                println!("  Tree file:         {}", path.display());
            }
        }
        println!("  Duration:          {:.2}s", summary.duration.as_secs_f64());
        println!("  Outcome:           {}", summary.outcome());

        if !summary.errors.is_empty() {
            println!("\n⚠️  Errors:");
            for error in &summary.errors {
                match &error.context {
                    Some(context) => {
                        println!("  [{:?}] {} ({})", error.stage, error.message, context)
                    }
                    None => println!("  [{:?}] {}", error.stage, error.message),
                }
            }
        }

        if summary.is_successful() {
            println!("\n✅ Export completed successfully");
            Ok(0)
        } else {
            println!("\n❌ Export completed with failures");
            Ok(1)
        }
    }
}

fn display_category(category: &str) -> &str {
    if category.trim().is_empty() {
        "(none - export will no-op)"
    } else {
        category
    }
}

fn display_category_opt(category: &Option<String>) -> &str {
    match category {
        Some(c) => c.as_str(),
        None => "(none)",
    }
}
