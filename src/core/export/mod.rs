//! Export pipeline stages and orchestration
//!
//! This module provides the core export logic for Feedmill, including:
//! - Product selection against the catalog store
//! - Tabular encoding of the selection into the staging file
//! - Tree re-encoding of staged rows into the catalog import document
//! - Export coordination, summary and reporting

pub mod coordinator;
pub mod selector;
pub mod summary;
pub mod tabular;
pub mod tree;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportError, ExportStage, ExportSummary, JobOutcome};
pub use tabular::{encode_tabular, TabularReader, TABULAR_HEADER};
pub use tree::{encode_tree, CATALOG_ID, CATALOG_XMLNS};
