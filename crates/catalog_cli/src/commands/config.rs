use anyhow::{Context, Result};
use catalog_loader::Settings;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    match config_path {
        Some(path) => info!("Resolving settings from {}", path.display()),
        None => info!("Resolving default settings"),
    }

    let settings = Settings::resolve(config_path).context("Failed to resolve settings")?;
    output::print_success("Configuration is valid");

    println!("\nPaths:");
    println!("  Data:            {}", settings.data_path.display());
    println!("  Database:        {}", settings.database_path.display());
    println!("  Table:           {}", settings.table_name);
    println!("  Report:          {}", settings.report_path().display());

    let rules = &settings.rules;
    println!("\nPrice rules:");
    println!("  Key column:      {}", rules.price.key_column);
    println!("  Price column:    {}", rules.price.price_column);
    println!("  Min price:       {}", rules.price.min_price);
    println!("  Max price:       {}", rules.price.max_price);

    println!("\nIdentifier rules:");
    println!("  Key column:      {}", rules.identifier.key_column);
    println!("  Pattern:         {}", rules.identifier.identifier_pattern);

    println!("\nInventory rules:");
    println!("  Key column:      {}", rules.inventory.key_column);
    println!("  Stock column:    {}", rules.inventory.inventory_column);
    println!("  Min inventory:   {}", rules.inventory.min_inventory);
    println!("  Low stock below: {}", rules.inventory.low_stock_threshold);

    println!("\nReporting:");
    println!("  Top issues:      {}", settings.top_issues);
    println!("  High price over: {}", settings.high_price_threshold);
    println!("  Category column: {}", settings.category_column);
    println!("  Name column:     {}", settings.name_column);

    Ok(())
}
