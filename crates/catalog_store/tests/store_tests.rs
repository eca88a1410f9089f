//! File-backed record store tests.

use catalog_core::{DataSet, DataValue, IssueRecord, RowBuilder};
use catalog_store::{RecordStore, SqliteStore, StoreConfig, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn catalog() -> DataSet {
    DataSet::with_columns(
        ["sku", "product_name", "category", "price", "inventory_count"],
        vec![
            RowBuilder::new()
                .value("sku", "SKU-00001")
                .value("product_name", "Lamp")
                .value("category", "Home")
                .value("price", "6000.00")
                .value("inventory_count", "4")
                .build(),
            RowBuilder::new()
                .value("sku", "SKU-00002")
                .value("product_name", "Rug")
                .value("category", "Home")
                .value("price", "120.00")
                .value("inventory_count", "9")
                .build(),
        ],
    )
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    {
        let mut store = SqliteStore::open(&db_path, StoreConfig::default()).unwrap();
        assert_eq!(store.load_dataset(&catalog()).unwrap(), 2);
        let issues = [IssueRecord::new(
            "SKU-00001",
            "low_stock_warning",
            "Inventory 4 is below threshold of 5",
        )];
        assert_eq!(store.save_issues(&issues).unwrap(), 1);
    }

    let store = SqliteStore::open(&db_path, StoreConfig::default()).unwrap();

    let expensive = store.high_price_products(5000.0).unwrap();
    assert_eq!(expensive.len(), 1);
    assert_eq!(expensive[0].identifier, "SKU-00001");
    assert_eq!(expensive[0].price, 6000.0);

    let issues = store
        .execute_query("SELECT issue_type FROM validation_issues", &[])
        .unwrap();
    assert_eq!(
        issues,
        vec![vec![(
            "issue_type".to_string(),
            DataValue::from("low_stock_warning")
        )]]
    );
}

#[test]
fn test_custom_table_and_columns() {
    let config = StoreConfig::builder()
        .table_name("catalog_items")
        .key_column("item_id")
        .category_column("department")
        .build()
        .unwrap();
    let mut store = SqliteStore::in_memory(config).unwrap();

    let dataset = DataSet::from_rows(vec![
        RowBuilder::new().value("item_id", "A").value("department", "X").build(),
        RowBuilder::new().value("item_id", "A").value("department", "Y").build(),
        RowBuilder::new().value("item_id", "B").value("department", "Y").build(),
    ]);
    store.load_dataset(&dataset).unwrap();

    let duplicates = store.duplicate_identifiers().unwrap();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].identifier, "A");

    let departments = store.records_by_category().unwrap();
    assert_eq!(departments[0].category.as_deref(), Some("Y"));
    assert_eq!(departments[0].record_count, 2);

    assert!(matches!(
        store.high_price_products(1.0).unwrap_err(),
        StoreError::MissingColumn { .. }
    ));
}

#[test]
fn test_null_identifiers_are_not_duplicates() {
    let mut store = SqliteStore::in_memory(StoreConfig::default()).unwrap();
    let dataset = DataSet::from_rows(vec![
        RowBuilder::new().null("sku").value("price", "1").build(),
        RowBuilder::new().null("sku").value("price", "2").build(),
    ]);
    store.load_dataset(&dataset).unwrap();

    assert!(store.duplicate_identifiers().unwrap().is_empty());
}

#[test]
fn test_invalid_sql_is_an_error() {
    let store = SqliteStore::in_memory(StoreConfig::default()).unwrap();

    let result = store.execute_query("SELEC nonsense", &[]);
    assert!(matches!(result.unwrap_err(), StoreError::Sqlite(_)));
}
