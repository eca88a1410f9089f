use anyhow::Result;
use catalog_core::IssueRecord;
use catalog_validator::{MetricsEngine, MetricsSnapshot, ScoreBand};
use chrono::Local;
use clap::ValueEnum;
use colored::*;
use serde_json::{Value, json};

const BANNER_WIDTH: usize = 72;
const SCORE_BAR_CELLS: usize = 20;
const ISSUE_BAR_CELLS: usize = 10;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// Machine-readable JSON
    Json,
}

pub fn print_section(title: &str) {
    println!("\n{}", "═".repeat(BANNER_WIDTH));
    println!("{}", format!("  {}", title).bold());
    println!("{}", "═".repeat(BANNER_WIDTH));
}

pub fn print_subsection(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "─".repeat(BANNER_WIDTH));
}

pub fn print_dashboard(metrics: &MetricsSnapshot, engine: &MetricsEngine) {
    print_section("DATA QUALITY VALIDATION DASHBOARD");
    println!("  Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    print_subsection("SUMMARY STATISTICS");
    println!(
        "  Total Records:       {:>10}",
        format_count(metrics.total_records())
    );
    println!(
        "  Valid Records:       {:>10}  {}",
        format_count(metrics.valid_records()),
        "✓".green()
    );
    println!(
        "  Invalid Records:     {:>10}  {}",
        format_count(metrics.invalid_records()),
        "✗".red()
    );
    println!(
        "  Total Errors Found:  {:>10}",
        format_count(metrics.total_errors())
    );

    print_subsection("DATA INTEGRITY SCORE");
    let band = metrics.band();
    println!(
        "  Score: {:>6.2}%  [{}]",
        metrics.integrity_score(),
        colored_band(band)
    );
    println!(
        "  [{}]",
        bar(metrics.integrity_score(), SCORE_BAR_CELLS)
    );

    print_subsection(&format!("TOP {} ISSUE TYPES BY FREQUENCY", engine.top_n()));
    let top = engine.top_issues(metrics);
    if top.is_empty() {
        println!("  No issues found!");
    }
    for (i, frequency) in top.iter().enumerate() {
        println!(
            "  {}. {:<28} {:>6} ({:>5.1}%)  [{}]",
            i + 1,
            frequency.issue_type,
            frequency.count,
            frequency.percentage,
            bar(frequency.percentage, ISSUE_BAR_CELLS)
        );
    }

    println!("\n{}", "═".repeat(BANNER_WIDTH));
    if metrics.invalid_records() == 0 {
        print_success("All records passed validation!");
    } else {
        print_warning(&format!(
            "{} records contain validation issues.",
            format_count(metrics.invalid_records())
        ));
    }
    println!("{}", "═".repeat(BANNER_WIDTH));
}

pub fn print_executive_summary(summary: &str) {
    print_subsection("EXECUTIVE SUMMARY");
    println!("{}", summary);
    println!("{}", "─".repeat(BANNER_WIDTH));
}

/// Prints `{"issues": [...], "metrics": {...}}` plus any extra sections.
pub fn print_json(
    issues: &[IssueRecord],
    metrics: &MetricsSnapshot,
    extra: Option<(&str, Value)>,
) -> Result<()> {
    let mut output = json!({
        "issues": issues,
        "metrics": metrics,
    });
    if let Some((key, value)) = extra {
        output[key] = value;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

fn colored_band(band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Excellent => band.label().green().bold(),
        ScoreBand::Good => band.label().cyan().bold(),
        ScoreBand::Fair => band.label().yellow().bold(),
        ScoreBand::Poor => band.label().red().bold(),
    }
}

/// Renders a percentage as a bar of `cells` cells.
pub fn bar(percentage: f64, cells: usize) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * cells as f64).floor() as usize).min(cells);
    format!("{}{}", "#".repeat(filled), "-".repeat(cells - filled))
}

/// Formats a count with thousands separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
