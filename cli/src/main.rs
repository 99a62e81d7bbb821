//! pricebook CLI - XLSX price-list extraction tool
//!
//! Reads a price-list workbook, groups line items under their package
//! headers, and writes the catalog as JSON to stdout.

use clap::Parser;
use colored::*;
use pricebook::{extract_catalog, render, Catalog, JsonFormat};
use std::path::PathBuf;

/// Recognized package names in the reference price list, in output order.
/// Overridable with `--package`.
const DEFAULT_PACKAGES: &[&str] = &[
    "Forecourt Island Equipment",
    "Forecourt Submerged Pump Package",
    "Tank Equipment",
];

/// Extract package pricing from an XLSX price list
#[derive(Parser)]
#[command(
    name = "pricebook",
    version,
    about = "Extract package pricing from an XLSX price list",
    long_about = "pricebook - XLSX price-list extraction.\n\n\
                  Walks the first worksheet of a price list, groups line items\n\
                  under their package header rows, and prints the catalog as\n\
                  JSON on stdout."
)]
struct Cli {
    /// Input .xlsx price list
    input: PathBuf,

    /// Recognized package name; repeat to declare the set, in output order
    /// (default: the reference equipment packages)
    #[arg(short, long = "package", value_name = "NAME")]
    packages: Vec<String>,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// Print per-package subtotals to stderr
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let packages: Vec<String> = if cli.packages.is_empty() {
        DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect()
    } else {
        cli.packages.clone()
    };

    let catalog = extract_catalog(&cli.input, &packages)?;

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", render::to_json(&catalog, format)?);

    if cli.summary {
        print_summary(&catalog);
    }

    Ok(())
}

/// Per-package subtotal table, on stderr so stdout stays pure JSON.
fn print_summary(catalog: &Catalog) {
    eprintln!("{}", "Package Summary".cyan().bold());
    eprintln!("{}", "─".repeat(48));

    for package in catalog.packages() {
        eprintln!(
            "{}: {} items, subtotal ${:.2}",
            package.name().bold(),
            package.len(),
            package.subtotal()
        );
    }

    eprintln!("{}", "─".repeat(48));
    eprintln!(
        "{}: {} items, ${:.2}",
        "Total".bold(),
        catalog.item_count(),
        catalog.grand_total()
    );
}
