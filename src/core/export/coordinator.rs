//! Export coordinator - main orchestrator for the export pipeline
//!
//! This module runs the three pipeline stages in order: product selection
//! against the catalog store, tabular encoding into the staging file, and
//! tree re-encoding of that file into the catalog import document. A stage
//! fault ends the run early; whatever a faulted stage already wrote stays on
//! disk for inspection.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::adapters::catalog::{self, CatalogStore};
use crate::config::FeedmillConfig;
use crate::core::export::selector::select_batch;
use crate::core::export::summary::{ExportError, ExportStage, ExportSummary};
use crate::core::export::tabular::{self, TabularReader};
use crate::core::export::tree;
use crate::domain::ids::CategoryId;
use crate::domain::{ProductRecord, Result};

/// Export coordinator
pub struct ExportCoordinator {
    config: FeedmillConfig,
    store: Arc<dyn CatalogStore>,
}

impl ExportCoordinator {
    /// Create a new export coordinator with the store named by configuration
    pub fn new(config: FeedmillConfig) -> Result<Self> {
        let store = catalog::create_store(&config.catalog)?;
        Ok(Self { config, store })
    }

    /// Create a coordinator over an explicit store
    ///
    /// Used by tests and by callers that already hold a store instance.
    pub fn with_store(config: FeedmillConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self { config, store }
    }

    /// Execute the export
    ///
    /// This is the main entry point for the export pipeline. It:
    /// 1. Validates configuration
    /// 2. Selects products assigned to the configured category, up to the
    ///    record limit
    /// 3. Encodes the selection as the tabular staging file
    /// 4. Re-encodes the staged rows as the catalog import document
    ///
    /// An unset category skips the run entirely: no files are touched and
    /// the summary reports a successful no-op. Stage faults land in the
    /// summary rather than in the returned error, so callers always get the
    /// counts accumulated up to the fault.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = self.config.application.dry_run;

        tracing::info!(
            run_id = %summary.run_id,
            store = %self.store.describe(),
            "Starting export run"
        );

        if let Err(e) = self.config.validate() {
            summary.add_error(ExportError::new(ExportStage::Configuration, e));
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        // An unset category is a deliberate no-op, not an error
        let raw_category = self.config.export.product_category.trim();
        if raw_category.is_empty() {
            tracing::info!(
                run_id = %summary.run_id,
                "No product category configured, skipping export"
            );
            summary.skipped = true;
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let category = match CategoryId::new(raw_category) {
            Ok(category) => category,
            Err(e) => {
                summary.add_error(ExportError::new(ExportStage::Configuration, e));
                return Ok(summary.with_duration(start_time.elapsed()));
            }
        };
        summary.category = Some(category.as_str().to_string());

        let limit = self.config.export.record_limit;
        let batch = match select_batch(self.store.as_ref(), &category, limit).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Catalog selection failed");
                summary.add_error(
                    ExportError::new(ExportStage::Selection, e.to_string())
                        .with_context(format!("category={category}")),
                );
                return Ok(summary.with_duration(start_time.elapsed()));
            }
        };
        summary.matched_products = batch.matched;
        summary.selected_products = batch.len();

        if summary.truncated() {
            tracing::info!(
                matched = batch.matched,
                selected = batch.len(),
                limit,
                "Record limit truncated the selection"
            );
        }

        if self.config.application.dry_run {
            tracing::info!(
                selected = batch.len(),
                tabular_file = %self.tabular_path().display(),
                tree_file = %self.tree_path().display(),
                "Dry run, stopping before any file is written"
            );
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        match self.config.staging.intermediate.as_str() {
            "memory" => self.run_with_memory_intermediate(&batch.records, &category, &mut summary),
            _ => self.run_with_file_intermediate(&batch.records, &category, &mut summary),
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    fn tabular_path(&self) -> PathBuf {
        Path::new(&self.config.staging.directory).join(&self.config.staging.tabular_file)
    }

    fn tree_path(&self) -> PathBuf {
        Path::new(&self.config.staging.directory).join(&self.config.staging.tree_file)
    }

    /// Stages 2 and 3 through the staging file on disk
    fn run_with_file_intermediate(
        &self,
        records: &[ProductRecord],
        category: &CategoryId,
        summary: &mut ExportSummary,
    ) {
        let tabular_path = self.tabular_path();

        match write_tabular_file(records, &tabular_path) {
            Ok(rows) => {
                tracing::info!(path = %tabular_path.display(), rows, "Tabular file staged");
                summary.rows_written = rows;
                summary.tabular_path = Some(tabular_path.clone());
            }
            Err(e) => {
                tracing::error!(path = %tabular_path.display(), error = %e, "Tabular encoding failed");
                summary.add_error(
                    ExportError::new(ExportStage::TabularEncode, e.to_string())
                        .with_context(tabular_path.display().to_string()),
                );
                return;
            }
        }

        // The staging writer was flushed and closed above; the tree stage
        // reads a finished file, never a half-written one.
        let source = match File::open(&tabular_path) {
            Ok(file) => file,
            Err(e) => {
                summary.add_error(
                    ExportError::new(
                        ExportStage::TreeEncode,
                        format!("Cannot open tabular file: {e}"),
                    )
                    .with_context(tabular_path.display().to_string()),
                );
                return;
            }
        };

        self.finish_tree_stage(TabularReader::new(BufReader::new(source)), category, summary);
    }

    /// Stages 2 and 3 through an in-memory buffer, leaving no tabular file
    fn run_with_memory_intermediate(
        &self,
        records: &[ProductRecord],
        category: &CategoryId,
        summary: &mut ExportSummary,
    ) {
        let mut buffer: Vec<u8> = Vec::new();
        match tabular::encode_tabular(records, &mut buffer) {
            Ok(rows) => summary.rows_written = rows,
            Err(e) => {
                summary.add_error(ExportError::new(ExportStage::TabularEncode, e.to_string()));
                return;
            }
        }

        self.finish_tree_stage(TabularReader::new(Cursor::new(buffer)), category, summary);
    }

    fn finish_tree_stage<R: Read>(
        &self,
        mut rows: TabularReader<R>,
        category: &CategoryId,
        summary: &mut ExportSummary,
    ) {
        let tree_path = self.tree_path();

        match reencode_tree(&mut rows, category, &tree_path) {
            Ok(Some(products)) => {
                tracing::info!(path = %tree_path.display(), products, "Tree document written");
                summary.products_encoded = products;
                summary.tree_path = Some(tree_path);
            }
            Ok(None) => {
                tracing::warn!("Tabular source has no header row, tree stage skipped");
            }
            Err(e) => {
                tracing::error!(path = %tree_path.display(), error = %e, "Tree re-encoding failed");
                summary.add_error(
                    ExportError::new(ExportStage::TreeEncode, e.to_string())
                        .with_context(tree_path.display().to_string()),
                );
            }
        }
    }
}

/// Writes the tabular staging file, creating parent directories as needed
///
/// The writer is flushed and dropped before this returns, so the file is
/// complete on disk the moment the caller sees `Ok`.
fn write_tabular_file(records: &[ProductRecord], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    let rows = tabular::encode_tabular(records, &mut sink)?;
    sink.flush()?;
    Ok(rows)
}

/// Re-encodes staged rows into the tree document at `path`
///
/// The first row read is the header; a source without even a header row
/// yields `Ok(None)` and no document file is created.
fn reencode_tree<R: Read>(
    rows: &mut TabularReader<R>,
    category: &CategoryId,
    path: &Path,
) -> Result<Option<usize>> {
    match rows.read_row()? {
        None => Ok(None),
        Some(_header) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let sink = File::create(path)?;
            let products = tree::encode_tree(rows, category, BufWriter::new(sink))?;
            Ok(Some(products))
        }
    }
}
