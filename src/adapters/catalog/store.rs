//! Catalog store port
//!
//! Defines the [`CatalogStore`] trait that abstracts the vendor catalog the
//! export job selects products from. The pipeline only ever talks to this
//! port, which keeps the store substitutable: a file-backed store in
//! deployments, an in-memory store in tests.

use crate::domain::ids::CategoryId;
use crate::domain::{Product, Result};
use async_trait::async_trait;

/// Trait for catalog store implementations
///
/// A store answers one question: which products are assigned to a category.
///
/// # Ordering
///
/// The order of the returned products is whatever the underlying search
/// produces. It is stable for a given store instance but otherwise
/// implementation-defined; callers may rely on "the first N in search order"
/// and nothing more.
///
/// # Example
///
/// ```no_run
/// use feedmill::adapters::catalog::{CatalogStore, InMemoryCatalog};
/// use feedmill::domain::CategoryId;
///
/// # async fn example() -> feedmill::domain::Result<()> {
/// let store = InMemoryCatalog::new();
/// let category = CategoryId::new("mens-shirts").map_err(feedmill::domain::FeedmillError::Validation)?;
/// let products = store.search(&category).await?;
/// println!("{} products assigned", products.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns every product assigned to `category`, in search order
    ///
    /// A category with no assignments (or one the catalog has never heard of)
    /// yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::CatalogError`] wrapped in `FeedmillError`
    /// when the store itself fails - unreadable backing file, corrupt
    /// content, failed query.
    async fn search(&self, category: &CategoryId) -> Result<Vec<Product>>;

    /// Human-readable description of the store, for logs
    fn describe(&self) -> String;
}
