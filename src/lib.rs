// Feedmill - Category Product Feed Exporter
// Copyright (c) 2026 Feedmill Contributors
// Licensed under the MIT License

//! # Feedmill - Category Product Feed Exporter
//!
//! Feedmill is a batch export tool built in Rust that turns a product
//! catalog into a per-category storefront feed: a staged CSV for auditing
//! and a catalog XML document for import.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Selecting** the first N products assigned to a category from a
//!   catalog store
//! - **Staging** the selection as a four-column CSV file
//! - **Re-encoding** the staged CSV as a catalog XML tree, one `product`
//!   element per data row
//!
//! ## Architecture
//!
//! Feedmill follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (selection, tabular and tree encoding)
//! - [`adapters`] - Catalog store backends (JSON dump, in-memory)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedmill::config::load_config;
//! use feedmill::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("feedmill.toml")?;
//!
//!     // Create export coordinator
//!     let coordinator = ExportCoordinator::new(config)?;
//!
//!     // Execute export
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Encoded {} products", summary.products_encoded);
//!     Ok(())
//! }
//! ```
//!
//! ## The Two Encoders
//!
//! The pipeline stages are plain functions over `Read`/`Write`, so they
//! work against files and in-memory buffers alike:
//!
//! ```rust
//! use feedmill::core::export::{encode_tabular, encode_tree, TabularReader};
//! use feedmill::domain::{CategoryId, Product, ProductRecord};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let product = Product::new(
//!     "P-100".parse()?,
//!     "Linen Shirt",
//!     Some("Breathable summer shirt".to_string()),
//!     Decimal::new(4999, 2),
//! );
//! let records = vec![ProductRecord::from_product(&product)];
//!
//! // Stage as CSV
//! let mut staged = Vec::new();
//! encode_tabular(&records, &mut staged)?;
//!
//! // Re-encode as catalog XML
//! let mut rows = TabularReader::new(staged.as_slice());
//! rows.read_row()?; // consume the header row
//! let category = CategoryId::new("mens-shirts")?;
//! let mut xml = Vec::new();
//! let encoded = encode_tree(&mut rows, &category, &mut xml)?;
//! assert_eq!(encoded, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Feedmill uses the [`domain::FeedmillError`] type for all errors:
//!
//! ```rust,no_run
//! use feedmill::domain::FeedmillError;
//!
//! fn example() -> Result<(), FeedmillError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = feedmill::config::load_config("feedmill.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Feedmill uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(category = "mens-shirts", "No products found");
//! error!(error = ?std::io::Error::other("boom"), "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
