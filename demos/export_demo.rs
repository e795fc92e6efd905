//! Example demonstrating a full feedmill export run
//!
//! This example shows how to:
//! - Initialize structured logging
//! - Seed an in-memory catalog store
//! - Run the export pipeline and inspect the summary
//!
//! Run with:
//! ```bash
//! cargo run --example export_demo
//! ```

use feedmill::adapters::catalog::InMemoryCatalog;
use feedmill::config::{
    ApplicationConfig, CatalogConfig, ExportConfig, FeedmillConfig, LoggingConfig, StagingConfig,
};
use feedmill::core::export::ExportCoordinator;
use feedmill::domain::{Product, ProductId};
use feedmill::logging::init_logging;
use rust_decimal::Decimal;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let staging_dir = std::env::temp_dir().join("feedmill_demo");

    // Initialize logging (keep the guard alive for the duration of the program)
    let logging_config = LoggingConfig {
        local_enabled: false,
        local_path: String::new(),
        local_rotation: "daily".to_string(),
        local_max_size_mb: 100,
    };
    let _guard = init_logging("info", &logging_config)?;

    tracing::info!("Feedmill export example started");

    // Seed a small catalog. A real deployment would point [catalog] at a
    // JSON dump instead.
    let mut catalog = InMemoryCatalog::new();
    catalog.insert(
        Product::new(
            ProductId::new("shirt-slim-1")?,
            "Slim Fit Shirt",
            Some("A slim fit shirt".to_string()),
            Decimal::new(2999, 2),
        ),
        &["mens-shirts", "sale"],
    );
    catalog.insert(
        Product::new(
            ProductId::new("shirt-oxford-2")?,
            "Oxford Shirt",
            Some("Classic oxford".to_string()),
            Decimal::new(4500, 2),
        ),
        &["mens-shirts"],
    );
    catalog.insert(
        Product::new(
            ProductId::new("mug-016")?,
            "Coffee Mug",
            None,
            Decimal::new(750, 2),
        ),
        &["kitchen"],
    );

    let config = FeedmillConfig {
        application: ApplicationConfig {
            log_level: "info".to_string(),
            dry_run: false,
        },
        catalog: CatalogConfig {
            source: "json".to_string(),
            path: "unused.json".to_string(),
        },
        export: ExportConfig {
            product_category: "mens-shirts".to_string(),
            record_limit: 10,
        },
        staging: StagingConfig {
            directory: staging_dir.to_string_lossy().into_owned(),
            ..StagingConfig::default()
        },
        logging: logging_config,
    };

    let coordinator = ExportCoordinator::with_store(config, Arc::new(catalog));
    let summary = coordinator.execute_export().await?;

    println!("\n✅ Export example completed: {}", summary.outcome());
    println!(
        "📦 Matched {} products, encoded {}",
        summary.matched_products, summary.products_encoded
    );
    if let Some(path) = &summary.tabular_path {
        println!("📁 Staged CSV:   {}", path.display());
    }
    if let Some(path) = &summary.tree_path {
        println!("📁 Catalog XML:  {}", path.display());
    }

    Ok(())
}
