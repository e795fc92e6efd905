//! Status command implementation
//!
//! This module implements the `status` command for inspecting the staging
//! artifacts left behind by the last export.

use crate::config::load_config;
use crate::core::export::TabularReader;
use chrono::{DateTime, Local};
use clap::Args;
use std::fs::{self, File};
use std::path::Path;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        println!("📊 Staging Status");
        println!();
        println!(
            "{:<10} {:<36} {:>10} {:>8}  {:<19}",
            "ARTIFACT", "PATH", "SIZE", "ROWS", "MODIFIED"
        );

        let staging = Path::new(&config.staging.directory);
        print_artifact(
            "tabular",
            &staging.join(&config.staging.tabular_file),
            true,
        );
        print_artifact("tree", &staging.join(&config.staging.tree_file), false);

        Ok(0)
    }
}

/// Print one table line for a staging artifact
///
/// For the tabular file the ROWS column counts data rows, excluding the
/// header. The tree file gets a dash there.
fn print_artifact(label: &str, path: &Path, count_rows: bool) {
    let display = path.display().to_string();

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => {
            println!("{:<10} {:<36} {:>10} {:>8}  {:<19}", label, display, "-", "-", "not present");
            return;
        }
    };

    let size = format!("{} B", metadata.len());
    let rows = if count_rows {
        match count_data_rows(path) {
            Ok(n) => n.to_string(),
            Err(_) => "?".to_string(),
        }
    } else {
        "-".to_string()
    };
    let modified = match metadata.modified() {
        Ok(time) => DateTime::<Local>::from(time)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => "unknown".to_string(),
    };

    println!("{label:<10} {display:<36} {size:>10} {rows:>8}  {modified:<19}");
}

/// Count data rows in a staged tabular file, excluding the header row
fn count_data_rows(path: &Path) -> crate::domain::Result<usize> {
    let mut rows = TabularReader::new(File::open(path)?);
    let mut count = 0usize;
    while rows.read_row()?.is_some() {
        count += 1;
    }
    Ok(count.saturating_sub(1))
}
