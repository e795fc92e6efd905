//! Product selection stage
//!
//! Asks the catalog store for the products assigned to the configured
//! category and keeps the first `limit` of them, in search order. Products
//! past the limit are dropped silently; the summary reports both counts so
//! truncation stays visible.

use tracing::info;

use crate::adapters::catalog::CatalogStore;
use crate::domain::ids::CategoryId;
use crate::domain::{ExportBatch, Result};

/// Selects up to `limit` products assigned to `category`
pub async fn select_batch(
    store: &dyn CatalogStore,
    category: &CategoryId,
    limit: usize,
) -> Result<ExportBatch> {
    let matches = store.search(category).await?;
    let batch = ExportBatch::from_matches(category.clone(), &matches, limit);

    info!(
        category = %category,
        matched = batch.matched,
        selected = batch.len(),
        limit,
        "Selection completed"
    );

    Ok(batch)
}
