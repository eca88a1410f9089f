use anyhow::{Context, Result};
use catalog_loader::Settings;
use catalog_store::{
    CategoryCount, CategoryInventory, DuplicateIdentifier, HighPriceProduct, RecordStore,
    SqliteStore,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::output::{self, OutputFormat};
use crate::pipeline;
use crate::report;

/// Rows shown per analytic query in the text output.
const DISPLAY_ROWS: usize = 5;

/// Results of the four analytic queries.
#[derive(Debug, Serialize)]
struct Analytics {
    duplicate_identifiers: Vec<DuplicateIdentifier>,
    records_by_category: Vec<CategoryCount>,
    high_price_products: Vec<HighPriceProduct>,
    inventory_by_category: Vec<CategoryInventory>,
}

pub fn execute(
    config_path: Option<&Path>,
    data_path: Option<PathBuf>,
    database_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let started = Instant::now();

    let mut settings = Settings::resolve(config_path).context("Failed to resolve settings")?;
    if let Some(path) = data_path {
        settings.data_path = path;
    }
    if let Some(path) = database_path {
        settings.database_path = path;
    }
    info!("Running catalog pipeline on {}", settings.data_path.display());

    let outcome = pipeline::validate_catalog(&settings)?;
    if format == OutputFormat::Text {
        output::print_info(&format!(
            "Loaded {} records from {}",
            outcome.dataset.len(),
            settings.data_path.display()
        ));
        output::print_success(&format!(
            "Report saved to {}",
            outcome.report_path.display()
        ));
        output::print_dashboard(&outcome.metrics, &outcome.metrics_engine);
        output::print_executive_summary(&report::executive_summary(&outcome.metrics));
    }

    // Persistence only starts once the metrics are final
    let store_config = pipeline::store_config(&settings)?;
    let mut store = SqliteStore::open(&settings.database_path, store_config).with_context(|| {
        format!(
            "Failed to open database {}",
            settings.database_path.display()
        )
    })?;
    let stored = store
        .load_dataset(&outcome.dataset)
        .context("Failed to load catalog into the database")?;
    store
        .save_issues(&outcome.run.issues)
        .context("Failed to store validation issues")?;
    info!(
        "Stored {} records in {}",
        stored,
        settings.database_path.display()
    );

    let analytics = Analytics {
        duplicate_identifiers: store
            .duplicate_identifiers()
            .context("Duplicate identifier query failed")?,
        records_by_category: store
            .records_by_category()
            .context("Category count query failed")?,
        high_price_products: store
            .high_price_products(settings.high_price_threshold)
            .context("High price query failed")?,
        inventory_by_category: store
            .inventory_by_category()
            .context("Inventory query failed")?,
    };

    match format {
        OutputFormat::Json => {
            output::print_json(
                &outcome.run.issues,
                &outcome.metrics,
                Some(("analytics", serde_json::to_value(&analytics)?)),
            )?;
        }
        OutputFormat::Text => {
            print_analytics(&analytics, &settings);

            output::print_section("PIPELINE EXECUTION SUMMARY");
            println!("  Records loaded:     {}", output::format_count(outcome.dataset.len()));
            println!("  Issues found:       {}", output::format_count(outcome.run.issues.len()));
            println!("  Integrity score:    {:.2}%", outcome.metrics.integrity_score());
            println!("  Report:             {}", outcome.report_path.display());
            println!("  Database:           {}", settings.database_path.display());
            println!("  Records stored:     {}", output::format_count(stored));
            println!("  Elapsed:            {} ms", started.elapsed().as_millis());
            output::print_success("Pipeline completed");
        }
    }

    Ok(())
}

fn print_analytics(analytics: &Analytics, settings: &Settings) {
    output::print_section("ANALYTICS");

    output::print_subsection("Duplicate identifiers");
    if analytics.duplicate_identifiers.is_empty() {
        println!("  None");
    }
    for row in analytics.duplicate_identifiers.iter().take(DISPLAY_ROWS) {
        println!("  {:<24} {:>8}", row.identifier, row.occurrence_count);
    }

    output::print_subsection("Records by category");
    for row in analytics.records_by_category.iter().take(DISPLAY_ROWS) {
        println!(
            "  {:<24} {:>8}",
            category_label(row.category.as_deref()),
            row.record_count
        );
    }

    output::print_subsection(&format!(
        "Products priced above {:.2}",
        settings.high_price_threshold
    ));
    if analytics.high_price_products.is_empty() {
        println!("  None");
    }
    for row in analytics.high_price_products.iter().take(DISPLAY_ROWS) {
        println!(
            "  {:<16} {:<28} {:>12.2}",
            row.identifier,
            row.product_name.as_deref().unwrap_or("-"),
            row.price
        );
    }

    output::print_subsection("Inventory by category");
    for row in analytics.inventory_by_category.iter().take(DISPLAY_ROWS) {
        println!(
            "  {:<24} {:>8}",
            category_label(row.category.as_deref()),
            row.total_inventory
        );
    }
}

fn category_label(category: Option<&str>) -> &str {
    category.unwrap_or("[EMPTY]")
}
