//! Product domain model
//!
//! Defines the catalog-facing [`Product`] entity and the [`ProductRecord`]
//! export row derived from it. The record is a positional, string-only view:
//! both encoders and the downstream reader rely on the fixed field order
//! (name, id, description, price) rather than named fields.

use super::ids::{CategoryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of fields in an export row. The tabular header, every data row and
/// every `product` element in the tree artifact carry exactly this many values.
pub const RECORD_FIELD_COUNT: usize = 4;

/// A product as the catalog store exposes it
///
/// Only the attributes the export pipeline reads are modeled here; the vendor
/// catalog itself carries far more. The price is a decimal value object that
/// is formatted to a string once, at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable external identifier, unique within a catalog
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Free-form short description; absent for some products
    pub short_description: Option<String>,

    /// Highest list price across the product's variants
    pub max_price: Decimal,
}

impl Product {
    /// Creates a product with all exportable attributes
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        short_description: Option<String>,
        max_price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            short_description,
            max_price,
        }
    }
}

/// One exported item, fully coerced to strings
///
/// Created by the selector; consumed positionally by the tabular encoder.
/// Field order is a contract: name, id, description, price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// Display name
    pub name: String,

    /// External product identifier
    pub id: String,

    /// Short description; empty string when the product has none
    pub short_description: String,

    /// Max price, already formatted as a decimal string. Never reinterpreted
    /// numerically downstream.
    pub max_price: String,
}

impl ProductRecord {
    /// Coerces a catalog product into its export row
    ///
    /// Description and price become their final string forms here; the
    /// formatting is not revisited by later stages.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            id: product.id.as_str().to_string(),
            short_description: product.short_description.clone().unwrap_or_default(),
            max_price: product.max_price.to_string(),
        }
    }

    /// Returns the record's fields in the fixed export order
    pub fn as_fields(&self) -> [&str; RECORD_FIELD_COUNT] {
        [
            &self.name,
            &self.id,
            &self.short_description,
            &self.max_price,
        ]
    }
}

/// The in-memory batch produced by one selection pass
///
/// Ephemeral: created per job invocation, serialized by the tabular encoder,
/// then discarded. `matched` keeps the pre-truncation count so the summary can
/// report how many products the category actually held.
#[derive(Debug, Clone)]
pub struct ExportBatch {
    /// Category the batch was selected from
    pub category_id: CategoryId,

    /// Total number of products the search matched, before truncation
    pub matched: usize,

    /// Selected records, in search order, truncated to the record limit
    pub records: Vec<ProductRecord>,
}

impl ExportBatch {
    /// Builds a batch from search results, keeping the first `limit` products
    pub fn from_matches(category_id: CategoryId, matches: &[Product], limit: usize) -> Self {
        let records = matches
            .iter()
            .take(limit)
            .map(ProductRecord::from_product)
            .collect();
        Self {
            category_id,
            matched: matches.len(),
            records,
        }
    }

    /// Number of records kept after truncation
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the selection matched nothing
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
