//! JSON file catalog store
//!
//! Loads a product dump exported from the upstream commerce platform. The
//! dump is a single JSON array of product objects; category assignment is a
//! plain list of category IDs on each product. File order is preserved, so a
//! category search returns products in the order the dump lists them.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::ids::{CategoryId, ProductId};
use crate::domain::{CatalogError, Product, Result};

use super::store::CatalogStore;

/// One product object as it appears in the dump file
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntry {
    /// External product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional marketing copy
    #[serde(default)]
    pub short_description: Option<String>,

    /// Highest list price across the product's variants
    pub max_price: Decimal,

    /// Categories the product is assigned to
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A validated dump entry paired with its category assignments
#[derive(Debug, Clone)]
struct CatalogRecord {
    product: Product,
    categories: Vec<String>,
}

/// Catalog store backed by a JSON product dump on disk
///
/// The whole dump is parsed and validated at open time, so `search` never
/// fails on malformed content - a bad file is rejected before the pipeline
/// starts.
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
    records: Vec<CatalogRecord>,
}

impl JsonCatalog {
    /// Opens and validates a catalog dump file
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::StoreUnavailable`] when the file is missing or
    /// unreadable, and [`CatalogError::InvalidFormat`] when it parses but
    /// contains entries the domain types reject (for example an empty
    /// product ID).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let raw = std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::StoreUnavailable(format!(
                "Cannot read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;

        let entries: Vec<ProductEntry> = serde_json::from_str(&raw).map_err(|e| {
            CatalogError::InvalidFormat(format!(
                "Catalog file {} is not a valid product dump: {}",
                path.display(),
                e
            ))
        })?;

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = ProductId::new(&entry.id).map_err(|e| {
                CatalogError::InvalidFormat(format!(
                    "Catalog file {}: invalid product ID {:?}: {}",
                    path.display(),
                    entry.id,
                    e
                ))
            })?;
            records.push(CatalogRecord {
                product: Product::new(id, entry.name, entry.short_description, entry.max_price),
                categories: entry.categories,
            });
        }

        info!(
            catalog = %path.display(),
            products = records.len(),
            "Loaded JSON catalog"
        );

        Ok(Self { path, records })
    }

    /// Number of products in the dump, across all categories
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the dump holds no products
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CatalogStore for JsonCatalog {
    async fn search(&self, category: &CategoryId) -> Result<Vec<Product>> {
        let matches: Vec<Product> = self
            .records
            .iter()
            .filter(|r| r.categories.iter().any(|c| c == category.as_str()))
            .map(|r| r.product.clone())
            .collect();

        debug!(
            category = %category,
            matched = matches.len(),
            "Catalog search completed"
        );

        Ok(matches)
    }

    fn describe(&self) -> String {
        format!("JSON catalog at {}", self.path.display())
    }
}
