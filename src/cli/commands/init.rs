//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "feedmill.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let output_path = Path::new(&self.output);

        if output_path.exists() && !self.force {
            eprintln!(
                "❌ File already exists: {}. Use --force to overwrite.",
                self.output
            );
            return Ok(2);
        }

        let config = if self.with_examples {
            generate_config_with_examples()
        } else {
            generate_minimal_config()
        };

        if let Err(e) = fs::write(output_path, config) {
            eprintln!("❌ Failed to write configuration file: {e}");
            return Ok(5);
        }

        println!("✅ Created configuration file: {}", self.output);
        println!();
        println!("Next steps:");
        println!("  1. Edit {} and point [catalog] at your product dump", self.output);
        println!("  2. Set [export] product_category to the category to export");
        println!("  3. Run: feedmill validate-config --config {}", self.output);
        println!("  4. Run: feedmill export --config {}", self.output);

        Ok(0)
    }
}

/// Generate a minimal configuration file
fn generate_minimal_config() -> String {
    r#"# Feedmill Configuration

[application]
log_level = "info"
dry_run = false

[catalog]
source = "json"
path = "catalog.json"

[export]
product_category = ""
record_limit = 10

[staging]
directory = "staging"
tabular_file = "csvProducts.csv"
tree_file = "csvProducts.xml"
intermediate = "file"

[logging]
local_enabled = true
local_path = "logs"
"#
    .to_string()
}

/// Generate a configuration file with example values and comments
fn generate_config_with_examples() -> String {
    r#"# Feedmill Configuration
#
# Values of the form ${VAR} are substituted from the environment at load
# time. Any FEEDMILL_SECTION_KEY environment variable overrides the
# matching key after the file is parsed, e.g. FEEDMILL_EXPORT_PRODUCT_CATEGORY.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"
# Simulate the export without writing staging files
dry_run = false

[catalog]
# Catalog store backend. Supported: json
source = "json"
# Path to the product dump, e.g. an export from your commerce platform
path = "${CATALOG_DUMP_PATH}"

[export]
# Category whose products are exported. Leave empty to make the job a no-op.
product_category = "mens-shirts"
# At most this many products end up in the feed (1-1000)
record_limit = 10

[staging]
# Directory holding the intermediate CSV and the final XML
directory = "staging"
tabular_file = "csvProducts.csv"
tree_file = "csvProducts.xml"
# "file" stages the CSV on disk; "memory" keeps it in a buffer and only
# writes the XML
intermediate = "file"

[logging]
# Write JSON logs to rotating files in addition to the console
local_enabled = true
local_path = "logs"
# Rotation policy: daily, size
local_rotation = "daily"
local_max_size_mb = 100
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedmill.toml");

        let args = InitArgs {
            output: path.to_str().unwrap().to_string(),
            with_examples: false,
            force: false,
        };
        let code = args.execute().await.unwrap();

        assert_eq!(code, 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedmill.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_str().unwrap().to_string(),
            with_examples: false,
            force: false,
        };
        let code = args.execute().await.unwrap();

        assert_eq!(code, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedmill.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_str().unwrap().to_string(),
            with_examples: false,
            force: true,
        };
        let code = args.execute().await.unwrap();

        assert_eq!(code, 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[catalog]"));
    }

    #[test]
    fn test_minimal_config_has_all_sections() {
        let config = generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[catalog]"));
        assert!(config.contains("[export]"));
        assert!(config.contains("[staging]"));
        assert!(config.contains("[logging]"));
        assert!(config.contains("record_limit = 10"));
        assert!(config.contains("csvProducts.csv"));
        assert!(config.contains("csvProducts.xml"));
    }

    #[test]
    fn test_minimal_config_parses_and_validates() {
        let config: crate::config::FeedmillConfig =
            toml::from_str(&generate_minimal_config()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_example_config_mentions_env_substitution() {
        let config = generate_config_with_examples();
        assert!(config.contains("${CATALOG_DUMP_PATH}"));
        assert!(config.contains("FEEDMILL_EXPORT_PRODUCT_CATEGORY"));
    }
}
