//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use std::path::PathBuf;
use std::time::Duration;

use uuid::Uuid;

/// Final outcome of an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Every stage completed, including the deliberate no-op run
    Ok,
    /// At least one stage faulted
    Error,
}

impl std::fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobOutcome::Ok => write!(f, "OK"),
            JobOutcome::Error => write!(f, "ERROR"),
        }
    }
}

/// Pipeline stage an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    /// Configuration validation, before any stage runs
    Configuration,
    /// Catalog search and limit application
    Selection,
    /// Writing the tabular file
    TabularEncode,
    /// Reading the tabular rows back and writing the tree document
    TreeEncode,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Stage the error was raised in
    pub stage: ExportStage,

    /// Error message
    pub message: String,

    /// Optional context (e.g., a file path)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(stage: ExportStage, message: String) -> Self {
        Self {
            stage,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Identifier of this run, for log correlation
    pub run_id: Uuid,

    /// Category the run exported, if one was configured
    pub category: Option<String>,

    /// Products the catalog search matched, before the limit
    pub matched_products: usize,

    /// Products kept after applying the record limit
    pub selected_products: usize,

    /// Data rows written to the tabular file (header not counted)
    pub rows_written: usize,

    /// Product elements written to the tree document
    pub products_encoded: usize,

    /// Path of the tabular file, when one was written
    pub tabular_path: Option<PathBuf>,

    /// Path of the tree document, when one was written
    pub tree_path: Option<PathBuf>,

    /// True when no category was configured and the run was a no-op
    pub skipped: bool,

    /// True when the run stopped after selection without writing files
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Errors encountered during the run
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary with a fresh run ID
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            category: None,
            matched_products: 0,
            selected_products: 0,
            rows_written: 0,
            products_encoded: 0,
            tabular_path: None,
            tree_path: None,
            skipped: false,
            dry_run: false,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Check if the run was successful (no stage faulted)
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// Final outcome of the run
    pub fn outcome(&self) -> JobOutcome {
        if self.is_successful() {
            JobOutcome::Ok
        } else {
            JobOutcome::Error
        }
    }

    /// True when the catalog matched more products than the limit kept
    pub fn truncated(&self) -> bool {
        self.matched_products > self.selected_products
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            category = self.category.as_deref().unwrap_or("-"),
            matched = self.matched_products,
            selected = self.selected_products,
            rows_written = self.rows_written,
            products_encoded = self.products_encoded,
            skipped = self.skipped,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            outcome = %self.outcome(),
            "Export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    stage = ?error.stage,
                    message = %error.message,
                    context = error.context.as_deref().unwrap_or("-"),
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
