//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Feedmill using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Feedmill - Category Product Feed Exporter
#[derive(Parser, Debug)]
#[command(name = "feedmill")]
#[command(version, about, long_about = None)]
#[command(author = "Feedmill Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "feedmill.toml", env = "FEEDMILL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FEEDMILL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export category products to staging CSV and catalog XML
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show staging artifacts from the last export
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
