//! Domain identifier types with validation
//!
//! Newtype wrappers for catalog identifiers. Each type guarantees the wrapped
//! value is non-empty so the rest of the pipeline never has to re-check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category identifier newtype wrapper
///
/// Identifies a catalog category used to select products for export.
/// An absent category is a valid no-op for the job as a whole, so the job
/// boundary decides up front whether a category was supplied; once a
/// `CategoryId` exists it is guaranteed non-empty.
///
/// # Examples
///
/// ```
/// use feedmill::domain::ids::CategoryId;
/// use std::str::FromStr;
///
/// let category = CategoryId::from_str("mens-shirts").unwrap();
/// assert_eq!(category.as_str(), "mens-shirts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new CategoryId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Category ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the category ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Product identifier newtype wrapper
///
/// The stable external identifier of a product, unique within a catalog.
/// This is the value the tree artifact carries as the `id` attribute of each
/// `product` element.
///
/// # Examples
///
/// ```
/// use feedmill::domain::ids::ProductId;
///
/// let id = ProductId::new("883360520").unwrap();
/// assert_eq!(id.as_str(), "883360520");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Product ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the product ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
