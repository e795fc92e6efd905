//! Integration tests for the full export pipeline
//!
//! These tests drive the coordinator through the public API: seed a catalog
//! store, run an export, and inspect the staging artifacts on disk.

use async_trait::async_trait;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use feedmill::adapters::catalog::{CatalogStore, InMemoryCatalog};
use feedmill::config::{
    ApplicationConfig, CatalogConfig, ExportConfig, FeedmillConfig, LoggingConfig, StagingConfig,
};
use feedmill::core::export::{ExportCoordinator, ExportStage, JobOutcome};
use feedmill::domain::{CatalogError, CategoryId, Product, ProductId};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use test_case::test_case;

fn test_config(staging_dir: &Path, category: &str) -> FeedmillConfig {
    FeedmillConfig {
        application: ApplicationConfig {
            log_level: "info".to_string(),
            dry_run: false,
        },
        catalog: CatalogConfig {
            source: "json".to_string(),
            path: "unused.json".to_string(),
        },
        export: ExportConfig {
            product_category: category.to_string(),
            record_limit: 10,
        },
        staging: StagingConfig {
            directory: staging_dir.to_string_lossy().into_owned(),
            ..StagingConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

fn product(id: &str, name: &str, description: Option<&str>, price: Decimal) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        name,
        description.map(str::to_string),
        price,
    )
}

/// Catalog with `total` generated products assigned to `category`
fn generated_catalog(total: usize, category: &str) -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for i in 0..total {
        let name: String = CatchPhrase().fake();
        let description: String = Sentence(3..8).fake();
        catalog.insert(
            product(
                &format!("p-{i}"),
                &name,
                Some(description.as_str()),
                Decimal::new(100 + i as i64 * 7, 2),
            ),
            &[category],
        );
    }
    catalog
}

#[tokio::test]
async fn test_export_writes_both_staging_artifacts() {
    let staging = TempDir::new().unwrap();
    let mut catalog = InMemoryCatalog::new();
    catalog.insert(
        product("W-1", "Widget", Some("Handy tool"), Decimal::new(1999, 2)),
        &["tools"],
    );
    catalog.insert(
        product("G-2", "Gadget", None, Decimal::new(500, 2)),
        &["tools", "sale"],
    );
    catalog.insert(
        product("B-3", "Bolt", Some("Steel"), Decimal::new(25, 2)),
        &["hardware"],
    );

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), "tools"), Arc::new(catalog));
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.outcome(), JobOutcome::Ok);
    assert_eq!(summary.matched_products, 2);
    assert_eq!(summary.selected_products, 2);
    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.products_encoded, 2);

    let csv = fs::read_to_string(staging.path().join("csvProducts.csv")).unwrap();
    assert_eq!(
        csv,
        "product name,product id,short description,product price\n\
         Widget,W-1,Handy tool,19.99\n\
         Gadget,G-2,,5.00\n"
    );

    let xml = fs::read_to_string(staging.path().join("csvProducts.xml")).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("xmlns=\"http://www.demandware.com/xml/impex/catalog/2021-01-01\""));
    assert!(xml.contains("catalog-id=\"storefront-catalog-m-en\""));
    assert!(xml.contains("category-id=\"tools\""));
    assert!(xml.contains("<product id=\"W-1\">"));
    assert!(xml.contains("<name>Widget</name>"));
    assert!(xml.contains("<description>Handy tool</description>"));
    assert!(xml.contains("<price>19.99</price>"));
    assert!(xml.contains("<product id=\"G-2\">"));
    // Products outside the category never appear
    assert!(!xml.contains("B-3"));
    // First product comes first in the document
    assert!(xml.find("W-1").unwrap() < xml.find("G-2").unwrap());
}

#[test_case(3, 3 ; "under the limit")]
#[test_case(10, 10 ; "exactly at the limit")]
#[test_case(25, 10 ; "over the limit")]
#[tokio::test]
async fn test_selection_respects_record_limit(total: usize, expected: usize) {
    let staging = TempDir::new().unwrap();
    let catalog = generated_catalog(total, "books");

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), "books"), Arc::new(catalog));
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.matched_products, total);
    assert_eq!(summary.selected_products, expected);
    assert_eq!(summary.products_encoded, expected);
    assert_eq!(summary.truncated(), total > expected);

    let xml = fs::read_to_string(staging.path().join("csvProducts.xml")).unwrap();
    // The first `expected` products in catalog order survive, no others
    assert!(xml.contains("<product id=\"p-0\">"));
    assert!(xml.contains(&format!("<product id=\"p-{}\">", expected - 1)));
    assert!(!xml.contains(&format!("<product id=\"p-{expected}\">")));
}

#[tokio::test]
async fn test_empty_category_is_a_noop() {
    let staging = TempDir::new().unwrap();
    let catalog = generated_catalog(5, "books");

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), ""), Arc::new(catalog));
    let summary = coordinator.execute_export().await.unwrap();

    assert!(summary.skipped);
    assert_eq!(summary.outcome(), JobOutcome::Ok);
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_zero_matches_still_produces_both_artifacts() {
    let staging = TempDir::new().unwrap();
    let catalog = generated_catalog(5, "books");

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), "garden"), Arc::new(catalog));
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.outcome(), JobOutcome::Ok);
    assert_eq!(summary.matched_products, 0);
    assert_eq!(summary.rows_written, 0);
    assert_eq!(summary.products_encoded, 0);

    // The tabular artifact is a bare header row
    let csv = fs::read_to_string(staging.path().join("csvProducts.csv")).unwrap();
    assert_eq!(csv, "product name,product id,short description,product price\n");

    // The tree artifact is well-formed with an empty products collection
    let xml = fs::read_to_string(staging.path().join("csvProducts.xml")).unwrap();
    assert!(xml.contains("category-id=\"garden\""));
    assert!(xml.contains("<products>"));
    assert!(!xml.contains("<product "));
}

#[tokio::test]
async fn test_round_trip_preserves_quoting_and_markup() {
    let staging = TempDir::new().unwrap();
    let mut catalog = InMemoryCatalog::new();
    catalog.insert(
        product(
            "F-9",
            "Frame & Easel",
            Some(r#"Fits 5" x 4" prints, <matted>"#),
            Decimal::new(4999, 2),
        ),
        &["art"],
    );

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), "art"), Arc::new(catalog));
    let summary = coordinator.execute_export().await.unwrap();
    assert_eq!(summary.outcome(), JobOutcome::Ok);

    // CSV quotes the field containing comma and literal quotes
    let csv = fs::read_to_string(staging.path().join("csvProducts.csv")).unwrap();
    assert!(csv.contains(r#""Fits 5"" x 4"" prints, <matted>""#));

    // XML escapes markup characters instead of emitting them raw
    let xml = fs::read_to_string(staging.path().join("csvProducts.xml")).unwrap();
    assert!(xml.contains("Frame &amp; Easel"));
    assert!(xml.contains("&lt;matted&gt;"));
    assert!(!xml.contains("<matted>"));
}

#[tokio::test]
async fn test_memory_intermediate_produces_identical_tree() {
    let on_disk = TempDir::new().unwrap();
    let in_memory = TempDir::new().unwrap();

    let file_coordinator = ExportCoordinator::with_store(
        test_config(on_disk.path(), "books"),
        Arc::new(generated_catalog(4, "books")),
    );
    file_coordinator.execute_export().await.unwrap();

    let mut config = test_config(in_memory.path(), "books");
    config.staging.intermediate = "memory".to_string();
    let memory_coordinator =
        ExportCoordinator::with_store(config, Arc::new(generated_catalog(4, "books")));
    let summary = memory_coordinator.execute_export().await.unwrap();

    // Memory mode skips the on-disk CSV entirely
    assert!(summary.tabular_path.is_none());
    assert!(!in_memory.path().join("csvProducts.csv").exists());

    // Both modes produce a tree with the same ids in the same order
    let file_xml = fs::read_to_string(on_disk.path().join("csvProducts.xml")).unwrap();
    let memory_xml = fs::read_to_string(in_memory.path().join("csvProducts.xml")).unwrap();
    for i in 0..4 {
        let marker = format!("<product id=\"p-{i}\">");
        assert!(file_xml.contains(&marker));
        assert!(memory_xml.contains(&marker));
    }
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let staging = TempDir::new().unwrap();
    let mut config = test_config(staging.path(), "books");
    config.application.dry_run = true;

    let coordinator =
        ExportCoordinator::with_store(config, Arc::new(generated_catalog(5, "books")));
    let summary = coordinator.execute_export().await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.outcome(), JobOutcome::Ok);
    assert_eq!(summary.matched_products, 5);
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn search(
        &self,
        _category: &CategoryId,
    ) -> feedmill::domain::Result<Vec<Product>> {
        Err(CatalogError::SearchFailed("store offline".to_string()).into())
    }

    fn describe(&self) -> String {
        "failing test store".to_string()
    }
}

#[tokio::test]
async fn test_catalog_fault_lands_in_summary_not_err() {
    let staging = TempDir::new().unwrap();

    let coordinator =
        ExportCoordinator::with_store(test_config(staging.path(), "books"), Arc::new(FailingStore));
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.outcome(), JobOutcome::Error);
    assert!(!summary.is_successful());
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].stage, ExportStage::Selection);
    assert!(summary.errors[0].message.contains("store offline"));
    assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_json_catalog_end_to_end() {
    let dir = TempDir::new().unwrap();
    let dump_path = dir.path().join("catalog.json");
    fs::write(
        &dump_path,
        r#"[
            {
                "id": "shirt-slim-1",
                "name": "Slim Fit Shirt",
                "short_description": "A slim fit shirt",
                "max_price": "29.99",
                "categories": ["mens-shirts"]
            },
            {
                "id": "mug-016",
                "name": "Coffee Mug",
                "max_price": "7.50",
                "categories": ["kitchen"]
            }
        ]"#,
    )
    .unwrap();

    let staging = dir.path().join("staging");
    let mut config = test_config(&staging, "mens-shirts");
    config.catalog.path = dump_path.to_string_lossy().into_owned();

    let coordinator = ExportCoordinator::new(config).unwrap();
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.outcome(), JobOutcome::Ok);
    assert_eq!(summary.products_encoded, 1);

    let xml = fs::read_to_string(staging.join("csvProducts.xml")).unwrap();
    assert!(xml.contains("<product id=\"shirt-slim-1\">"));
    assert!(xml.contains("<price>29.99</price>"));
    assert!(!xml.contains("mug-016"));
}
