//! Core business logic for Feedmill.
//!
//! This module contains the core pipeline logic and orchestration for
//! category exports.
//!
//! # Modules
//!
//! - [`export`] - Pipeline stages, coordination, and run summaries
//!
//! # Export Workflow
//!
//! The typical export workflow:
//!
//! 1. **Select**: Search the catalog store for products assigned to the
//!    configured category and keep the first N in search order
//! 2. **Tabular encode**: Write the selection as a four-column CSV with a
//!    fixed header row
//! 3. **Tree re-encode**: Read the staged rows back and write the catalog
//!    import document
//! 4. **Report**: Generate the run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use feedmill::config::load_config;
//! use feedmill::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("feedmill.toml")?;
//!
//! // Create export coordinator
//! let coordinator = ExportCoordinator::new(config)?;
//!
//! // Execute export
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Selected: {}", summary.selected_products);
//! println!("Rows written: {}", summary.rows_written);
//! println!("Outcome: {}", summary.outcome());
//! # Ok(())
//! # }
//! ```

pub mod export;
