//! Validation report file and executive summary.

use crate::output::format_count;
use anyhow::Result;
use catalog_core::IssueRecord;
use catalog_validator::{IssueFrequency, MetricsSnapshot};
use std::fs;
use std::path::Path;

const REPORT_HEADER: [&str; 3] = ["identifier", "issue_type", "issue_description"];
const SUMMARY_TOP_ISSUES: usize = 3;

/// Writes one CSV row per issue, in input order, creating the parent
/// directory if needed.
pub fn write_csv_report(path: &Path, issues: &[IssueRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(REPORT_HEADER)?;
    for issue in issues {
        writer.write_record([
            issue.identifier(),
            issue.issue_type(),
            issue.issue_description(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// One-paragraph narrative of the run for non-technical readers.
pub fn executive_summary(metrics: &MetricsSnapshot) -> String {
    let total = format_count(metrics.total_records());
    let invalid = format_count(metrics.invalid_records());
    let invalid_pct = metrics.invalid_percentage();
    let score = metrics.integrity_score();
    let health = metrics.band().label().to_lowercase();
    let drivers = describe_drivers(metrics.top_issues(SUMMARY_TOP_ISSUES));

    if metrics.invalid_records() == 0 {
        format!(
            "Validation of {} catalog records identified no data integrity issues. \
             The {} integrity score of {:.1}% confirms the catalog is ready for release.",
            total, health, score
        )
    } else if invalid_pct < 5.0 {
        format!(
            "Validation of {} catalog records found {} records ({:.1}%) with integrity issues, {}. \
             The {} integrity score of {:.1}% demonstrates strong data quality; \
             only targeted corrections are needed.",
            total, invalid, invalid_pct, drivers, health, score
        )
    } else if invalid_pct < 15.0 {
        format!(
            "Validation of {} catalog records found {} records ({:.1}%) with integrity issues, {}. \
             The {} integrity score of {:.1}% shows moderate quality concerns; \
             deduplicating identifiers and standardizing fields should precede the next release.",
            total, invalid, invalid_pct, drivers, health, score
        )
    } else {
        format!(
            "Validation of {} catalog records found significant integrity issues in {} records ({:.1}%), {}. \
             The {} integrity score of {:.1}% {} that remediation is required before release.",
            total,
            invalid,
            invalid_pct,
            drivers,
            health,
            score,
            if score >= 50.0 { "indicates" } else { "reveals" }
        )
    }
}

fn describe_drivers(top: &[IssueFrequency]) -> String {
    let names: Vec<String> = top
        .iter()
        .map(|f| format!("{} ({}%)", title_case(&f.issue_type), f.percentage as u32))
        .collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => format!("driven by {}", only),
        [first, second] => format!("primarily driven by {} and {}", first, second),
        [init @ .., last] => format!("primarily driven by {}, and {}", init.join(", "), last),
    }
}

/// `duplicate_sku` -> `Duplicate Sku`.
fn title_case(issue_type: &str) -> String {
    issue_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
