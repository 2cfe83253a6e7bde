//! GST Reconciliation - CLI tool for reconciling a GSTR-2B portal download
//! against a purchase register.

use clap::Parser;
use gstrecon::csv_format::{read_table, write_report};
use gstrecon::reconcile::reconcile;
use gstrecon::Result;
use std::fs::File;

#[derive(Parser)]
#[command(name = "gstrecon")]
#[command(about = "Reconcile a GSTR-2B portal download against a purchase register", long_about = None)]
struct Cli {
    /// Portal (GSTR-2B) CSV file path
    #[arg(long)]
    portal: String,

    /// Books (purchase register) CSV file path
    #[arg(long)]
    books: String,

    /// Directory for the report CSV files
    #[arg(long = "out-dir", default_value = ".")]
    out_dir: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut portal_file = File::open(&cli.portal)?;
    let portal = read_table(&mut portal_file)?;

    let mut books_file = File::open(&cli.books)?;
    let books = read_table(&mut books_file)?;

    let outcome = reconcile(&portal, &books)?;

    write_report(&outcome.report, &cli.out_dir)?;

    println!("Reconciliation complete.");
    for (category, count) in outcome.counts.categories() {
        println!("  {:<18} {}", format!("{category}:"), count);
    }

    if outcome.portal_coerced > 0 {
        println!(
            "Note: {} unparseable amount cell(s) in the portal data were treated as 0.",
            outcome.portal_coerced
        );
    }
    if outcome.books_coerced > 0 {
        println!(
            "Note: {} unparseable amount cell(s) in the books data were treated as 0.",
            outcome.books_coerced
        );
    }

    println!("Report written to {}", cli.out_dir);

    Ok(())
}
