mod commands;
mod output;
mod pipeline;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cae")]
#[command(version, about = "Catalog Automation Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog CSV and print the quality dashboard
    Validate {
        /// Path to the catalog CSV file
        data: PathBuf,

        /// Settings file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Directory for the validation report (overrides settings)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Exit with status 2 when any issue is found
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Run the full pipeline: validation, report, database load and analytics
    Run {
        /// Settings file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the catalog CSV file (overrides settings)
        #[arg(long)]
        data: Option<PathBuf>,

        /// SQLite database file (overrides settings)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the resolved configuration
    Config {
        /// Settings file (YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            data,
            config,
            format,
            report_dir,
            fail_on_issues,
        } => commands::validate::execute(
            &data,
            config.as_deref(),
            format,
            report_dir.as_deref(),
            fail_on_issues,
        ),

        Commands::Run {
            config,
            data,
            db,
            format,
        } => commands::run::execute(config.as_deref(), data, db, format),

        Commands::Config { config } => commands::config::execute(config.as_deref()),
    }
}
