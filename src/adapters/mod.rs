//! External system integrations for Feedmill.
//!
//! This module provides adapters for the systems the export pipeline reads
//! from:
//!
//! - [`catalog`] - Catalog store abstraction (JSON dump file, in-memory)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with substitute implementations. The catalog layer uses
//! trait-based abstraction so the pipeline never depends on a concrete store.
//!
//! # Catalog Adapter
//!
//! ```rust,no_run
//! use feedmill::adapters::catalog::{create_store, CatalogStore};
//! use feedmill::config::CatalogConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig {
//!     source: "json".to_string(),
//!     path: "data/catalog.json".to_string(),
//! };
//!
//! let store = create_store(&config)?;
//! println!("Using {}", store.describe());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
