//! Pipeline stages shared by the `validate` and `run` commands.

use crate::report;
use anyhow::{Context, Result};
use catalog_core::DataSet;
use catalog_loader::{Settings, load_csv};
use catalog_store::StoreConfig;
use catalog_validator::{MetricsEngine, MetricsSnapshot, ValidationEngine, ValidationRun};
use std::path::PathBuf;
use tracing::info;

/// Everything produced by ingestion, validation, reporting and metrics.
pub struct ValidationOutcome {
    pub dataset: DataSet,
    pub run: ValidationRun,
    pub metrics: MetricsSnapshot,
    pub metrics_engine: MetricsEngine,
    pub report_path: PathBuf,
}

/// Loads the catalog, runs every checker, writes the CSV report and computes
/// the quality metrics.
pub fn validate_catalog(settings: &Settings) -> Result<ValidationOutcome> {
    let dataset = load_csv(&settings.data_path).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            settings.data_path.display()
        )
    })?;

    let engine = ValidationEngine::with_default_checkers(&settings.rules)
        .context("Invalid validation rules")?;
    let run = engine
        .run_with_summary(&dataset)
        .context("Validation aborted")?;

    let report_path = settings.report_path();
    report::write_csv_report(&report_path, &run.issues).with_context(|| {
        format!(
            "Failed to write validation report to {}",
            report_path.display()
        )
    })?;
    info!(
        "Validation report written to {} ({} issues)",
        report_path.display(),
        run.issues.len()
    );

    let metrics_engine = MetricsEngine::new(settings.top_issues);
    let metrics = metrics_engine.compute(dataset.len(), &run.issues);

    Ok(ValidationOutcome {
        dataset,
        run,
        metrics,
        metrics_engine,
        report_path,
    })
}

/// Store configuration matching the columns the rules read.
pub fn store_config(settings: &Settings) -> Result<StoreConfig> {
    StoreConfig::builder()
        .table_name(settings.table_name.as_str())
        .key_column(settings.rules.identifier.key_column.as_str())
        .category_column(settings.category_column.as_str())
        .name_column(settings.name_column.as_str())
        .price_column(settings.rules.price.price_column.as_str())
        .inventory_column(settings.rules.inventory.inventory_column.as_str())
        .build()
        .context("Invalid store configuration")
}
