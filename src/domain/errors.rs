//! Domain error types
//!
//! Error hierarchy for the export pipeline. All errors are domain-specific
//! and don't leak third-party types across module boundaries; stage context
//! (which pipeline step failed) is attached by the coordinator, not here.

use thiserror::Error;

/// Main feedmill error type
///
/// The primary error type used throughout the crate. Collaborator faults are
/// wrapped (`Catalog`), codec faults are mapped by concern.
#[derive(Debug, Error)]
pub enum FeedmillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog store errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Tabular (CSV) encoding or decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Tree (XML) encoding errors
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Catalog-store-specific errors
///
/// Faults raised while contacting the catalog collaborator. Per the job
/// contract these are never handled inside the pipeline stages; they surface
/// in the export summary as an ERROR outcome.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be opened or loaded
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store content does not parse as a catalog
    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    /// The search itself failed
    #[error("Catalog search failed: {0}")]
    SearchFailed(String),

    /// The configured catalog source kind is not supported
    #[error("Unsupported catalog source: {0}")]
    UnsupportedSource(String),
}

impl From<std::io::Error> for FeedmillError {
    fn from(err: std::io::Error) -> Self {
        FeedmillError::Io(err.to_string())
    }
}

impl From<csv::Error> for FeedmillError {
    fn from(err: csv::Error) -> Self {
        FeedmillError::Csv(err.to_string())
    }
}

impl From<quick_xml::Error> for FeedmillError {
    fn from(err: quick_xml::Error) -> Self {
        FeedmillError::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for FeedmillError {
    fn from(err: serde_json::Error) -> Self {
        FeedmillError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for FeedmillError {
    fn from(err: toml::de::Error) -> Self {
        FeedmillError::Configuration(format!("TOML parse error: {err}"))
    }
}
