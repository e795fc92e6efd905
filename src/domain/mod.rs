//! Domain models and types for feedmill.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CategoryId`], [`ProductId`])
//! - **Domain models** ([`Product`], [`ProductRecord`], [`ExportBatch`])
//! - **Error types** ([`FeedmillError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so a category can never be passed
//! where a product id is expected:
//!
//! ```rust
//! use feedmill::domain::{CategoryId, ProductId};
//!
//! # fn example() -> Result<(), String> {
//! let category = CategoryId::new("mens-shirts")?;
//! let product = ProductId::new("883360520")?;
//! // let wrong: CategoryId = product;  // does not compile
//! # Ok(())
//! # }
//! ```
//!
//! # The positional record contract
//!
//! [`ProductRecord`] is the unit both encoders agree on: four string fields
//! in a fixed order (name, id, description, price). The tree re-encoder reads
//! the tabular artifact positionally, so the order is part of the format, not
//! an implementation detail.

pub mod errors;
pub mod ids;
pub mod product;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CatalogError, FeedmillError};
pub use ids::{CategoryId, ProductId};
pub use product::{ExportBatch, Product, ProductRecord, RECORD_FIELD_COUNT};
pub use result::Result;
