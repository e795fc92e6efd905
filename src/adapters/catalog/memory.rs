//! In-memory catalog store
//!
//! Keeps products and their category assignments in a plain vector. Used by
//! the integration tests and handy for local experiments; never configured
//! in a real deployment.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ids::CategoryId;
use crate::domain::{Product, Result};

use super::store::CatalogStore;

/// Catalog store holding products in memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Vec<(Product, Vec<String>)>,
}

impl InMemoryCatalog {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product together with its category assignments
    pub fn insert(&mut self, product: Product, categories: &[&str]) {
        let categories = categories.iter().map(|c| c.to_string()).collect();
        self.records.push((product, categories));
    }

    /// Number of products held, across all categories
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no products
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn search(&self, category: &CategoryId) -> Result<Vec<Product>> {
        let matches: Vec<Product> = self
            .records
            .iter()
            .filter(|(_, cats)| cats.iter().any(|c| c == category.as_str()))
            .map(|(p, _)| p.clone())
            .collect();

        debug!(
            category = %category,
            matched = matches.len(),
            "In-memory catalog search completed"
        );

        Ok(matches)
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} products)", self.records.len())
    }
}
