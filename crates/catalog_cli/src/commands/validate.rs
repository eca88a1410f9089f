use anyhow::{Context, Result};
use catalog_loader::Settings;
use std::path::Path;
use tracing::info;

use crate::output::{self, OutputFormat};
use crate::pipeline;
use crate::report;

/// Exit status when `--fail-on-issues` is set and issues were found.
const ISSUES_FOUND_EXIT_CODE: i32 = 2;

pub fn execute(
    data_path: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
    report_dir: Option<&Path>,
    fail_on_issues: bool,
) -> Result<()> {
    info!("Validating catalog: {}", data_path.display());

    let mut settings = Settings::resolve(config_path).context("Failed to resolve settings")?;
    settings.data_path = data_path.to_path_buf();
    if let Some(dir) = report_dir {
        settings.report_dir = dir.to_path_buf();
    }

    let outcome = pipeline::validate_catalog(&settings)?;

    match format {
        OutputFormat::Json => {
            output::print_json(&outcome.run.issues, &outcome.metrics, None)?;
        }
        OutputFormat::Text => {
            output::print_info(&format!(
                "Loaded {} records with {} columns",
                outcome.dataset.len(),
                outcome.dataset.columns().len()
            ));
            output::print_info(&format!(
                "Validated {} records in {} ms",
                outcome.run.records_validated, outcome.run.duration_ms
            ));
            for checker in &outcome.run.checkers {
                output::print_info(&format!(
                    "{}: {} issues",
                    checker.name, checker.issue_count
                ));
            }
            output::print_success(&format!(
                "Report saved to {}",
                outcome.report_path.display()
            ));
            output::print_dashboard(&outcome.metrics, &outcome.metrics_engine);
            output::print_executive_summary(&report::executive_summary(&outcome.metrics));
        }
    }

    if fail_on_issues && !outcome.run.issues.is_empty() {
        std::process::exit(ISSUES_FOUND_EXIT_CODE);
    }

    Ok(())
}
