use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the cae binary
#[allow(deprecated)]
fn cae() -> Command {
    Command::cargo_bin("cae").expect("Failed to find cae binary")
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_prints_dashboard() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA QUALITY VALIDATION DASHBOARD"))
        .stdout(predicate::str::contains("Total Records:"))
        .stdout(predicate::str::contains("POOR"))
        .stdout(predicate::str::contains("duplicate_sku"))
        .stdout(predicate::str::contains("EXECUTIVE SUMMARY"))
        .stdout(predicate::str::contains("7 records contain validation issues"));
}

#[test]
fn test_validate_reports_run_timing() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Validated 10 records in \d+ ms").unwrap())
        .stdout(predicate::str::contains("PriceChecker: 3 issues"));
}

#[test]
fn test_validate_writes_report() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    let report = fs::read_to_string(temp_dir.path().join("validation_report.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "identifier,issue_type,issue_description");
    assert_eq!(lines.len(), 10);
    assert!(report.contains("SKU-00004,price_too_low,"));
    assert!(report.contains("BAD-5,invalid_sku_format,"));
    assert!(report.contains("SKU-00007,invalid_inventory_format,"));
}

#[test]
fn test_validate_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--format")
        .arg("json")
        .arg("--report-dir")
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["issues"].as_array().unwrap().len(), 9);
    assert_eq!(json["issues"][0]["identifier"], "SKU-00004");
    assert_eq!(json["issues"][0]["issue_type"], "price_too_low");
    assert_eq!(json["metrics"]["total_records"], 10);
    assert_eq!(json["metrics"]["invalid_records"], 7);
    assert_eq!(json["metrics"]["total_errors"], 9);
    assert_eq!(json["metrics"]["integrity_score"], 30.0);
    assert_eq!(json["metrics"]["issue_frequency"][0]["issue_type"], "duplicate_sku");
    assert_eq!(json["metrics"]["issue_frequency"][0]["count"], 2);
}

#[test]
fn test_validate_clean_catalog() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("clean_catalog.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .arg("--fail-on-issues")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXCELLENT"))
        .stdout(predicate::str::contains("No issues found!"))
        .stdout(predicate::str::contains("All records passed validation!"));
}

#[test]
fn test_validate_fail_on_issues() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .arg("--fail-on-issues")
        .assert()
        .code(2);
}

#[test]
fn test_validate_missing_price_column() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("missing_price.csv"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation aborted"))
        .stderr(predicate::str::contains("PriceChecker"))
        .stderr(predicate::str::contains("'price'"));

    assert!(!temp_dir.path().join("validation_report.csv").exists());
}

#[test]
fn test_validate_nonexistent_file() {
    cae()
        .arg("validate")
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_validate_with_yaml_settings() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--config")
        .arg(fixture_path("settings.yml"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TOP 3 ISSUE TYPES BY FREQUENCY"))
        .stdout(predicate::str::contains("  3. "))
        .stdout(predicate::str::contains("  4. ").not());

    let report = fs::read_to_string(temp_dir.path().join("catalog_issues.csv")).unwrap();
    assert!(report.contains("SKU-00002,price_too_high,"));
    assert!(report.contains("SKU-00009,low_stock_warning,"));
}

#[test]
fn test_validate_with_invalid_rules() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--config")
        .arg(fixture_path("invalid_rules.yml"))
        .arg("--report-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_price"));
}

#[test]
fn test_validate_env_override() {
    let temp_dir = TempDir::new().unwrap();

    let output = cae()
        .arg("validate")
        .arg(fixture_path("clean_catalog.csv"))
        .arg("--format")
        .arg("json")
        .arg("--report-dir")
        .arg(temp_dir.path())
        .env("CATALOG_LOW_STOCK_THRESHOLD", "20")
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["issues"].as_array().unwrap().len(), 1);
    assert_eq!(json["issues"][0]["identifier"], "SKU-00003");
    assert_eq!(json["issues"][0]["issue_type"], "low_stock_warning");
}

// ============================================================================
// run command tests
// ============================================================================

#[test]
fn test_run_full_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    cae()
        .arg("run")
        .arg("--data")
        .arg(fixture_path("catalog.csv"))
        .arg("--db")
        .arg(&db_path)
        .env("CATALOG_REPORT_DIR", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA QUALITY VALIDATION DASHBOARD"))
        .stdout(predicate::str::contains("ANALYTICS"))
        .stdout(predicate::str::contains("SKU-00002"))
        .stdout(predicate::str::contains("[EMPTY]"))
        .stdout(predicate::str::contains("Patio Heater"))
        .stdout(predicate::str::contains("PIPELINE EXECUTION SUMMARY"))
        .stdout(predicate::str::contains("Pipeline completed"));

    assert!(db_path.exists());
    assert!(temp_dir.path().join("validation_report.csv").exists());
}

#[test]
fn test_run_json_analytics() {
    let temp_dir = TempDir::new().unwrap();

    let output = cae()
        .arg("run")
        .arg("--data")
        .arg(fixture_path("catalog.csv"))
        .arg("--db")
        .arg(temp_dir.path().join("catalog.db"))
        .arg("--format")
        .arg("json")
        .env("CATALOG_REPORT_DIR", temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let analytics = &json["analytics"];
    assert_eq!(json["metrics"]["total_records"], 10);

    let duplicates = analytics["duplicate_identifiers"].as_array().unwrap();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0]["identifier"], "SKU-00002");
    assert_eq!(duplicates[0]["occurrence_count"], 2);

    let categories = analytics["records_by_category"].as_array().unwrap();
    assert_eq!(categories[0]["category"], "Garden");
    assert_eq!(categories[0]["record_count"], 4);

    let expensive = analytics["high_price_products"].as_array().unwrap();
    assert_eq!(expensive.len(), 3);
    assert_eq!(expensive[0]["identifier"], "SKU-00009");
    assert_eq!(expensive[0]["price"], 10000.0);
}

#[test]
fn test_run_with_toml_settings() {
    let temp_dir = TempDir::new().unwrap();

    let output = cae()
        .arg("run")
        .arg("--config")
        .arg(fixture_path("settings.toml"))
        .arg("--data")
        .arg(fixture_path("catalog.csv"))
        .arg("--db")
        .arg(temp_dir.path().join("catalog.db"))
        .arg("--format")
        .arg("json")
        .env("CATALOG_REPORT_DIR", temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let issue_types: Vec<&str> = json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|issue| issue["issue_type"].as_str())
        .collect();
    assert!(!issue_types.contains(&"invalid_sku_format"));

    let expensive = json["analytics"]["high_price_products"].as_array().unwrap();
    assert_eq!(expensive.len(), 3);
}

#[test]
fn test_run_missing_data_file() {
    let temp_dir = TempDir::new().unwrap();

    cae()
        .arg("run")
        .arg("--data")
        .arg(temp_dir.path().join("missing.csv"))
        .arg("--db")
        .arg(temp_dir.path().join("catalog.db"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load catalog"));

    assert!(!temp_dir.path().join("catalog.db").exists());
}

// ============================================================================
// config command tests
// ============================================================================

#[test]
fn test_config_defaults() {
    cae()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("^SKU-\\d{5}$"))
        .stdout(predicate::str::contains("inventory_count"));
}

#[test]
fn test_config_from_yaml() {
    cae()
        .arg("config")
        .arg("--config")
        .arg(fixture_path("settings.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog_issues.csv"))
        .stdout(predicate::str::contains("Max price:       500"))
        .stdout(predicate::str::contains("Low stock below: 10"));
}

#[test]
fn test_config_from_toml() {
    cae()
        .arg("config")
        .arg("--config")
        .arg(fixture_path("settings.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog_items"))
        .stdout(predicate::str::contains("^[A-Z]+-\\d+$"));
}

#[test]
fn test_config_env_override() {
    cae()
        .arg("config")
        .env("CATALOG_MIN_PRICE", "2.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Min price:       2.5"));
}

#[test]
fn test_config_invalid_env_override() {
    cae()
        .arg("config")
        .env("CATALOG_MAX_PRICE", "expensive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CATALOG_MAX_PRICE"));
}

#[test]
fn test_config_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, "{}").unwrap();

    cae()
        .arg("config")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// General CLI tests
// ============================================================================

#[test]
fn test_help() {
    cae()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog Automation Engine"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    cae()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cae"));
}

#[test]
fn test_invalid_format_rejected() {
    cae()
        .arg("validate")
        .arg(fixture_path("catalog.csv"))
        .arg("--format")
        .arg("xml")
        .assert()
        .failure();
}
