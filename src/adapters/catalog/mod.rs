//! Catalog store adapters
//!
//! The export pipeline selects products through the [`CatalogStore`] port.
//! [`JsonCatalog`] is the store used in deployments; [`InMemoryCatalog`]
//! backs tests. [`create_store`] picks the implementation named by
//! configuration.

pub mod json;
pub mod memory;
pub mod store;

pub use json::JsonCatalog;
pub use memory::InMemoryCatalog;
pub use store::CatalogStore;

use std::sync::Arc;

use crate::config::schema::CatalogConfig;
use crate::domain::{CatalogError, Result};

/// Builds the catalog store named by configuration
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedSource`] for a source kind this build
/// does not know, or the store's own open error.
pub fn create_store(config: &CatalogConfig) -> Result<Arc<dyn CatalogStore>> {
    match config.source.to_lowercase().as_str() {
        "json" => {
            let catalog = JsonCatalog::open(&config.path)?;
            Ok(Arc::new(catalog))
        }
        other => Err(CatalogError::UnsupportedSource(format!(
            "{}. Supported sources: json",
            other
        ))
        .into()),
    }
}
