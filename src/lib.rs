//! GST Reconciliation Library
//!
//! A library for reconciling two independently-sourced ledgers of purchase
//! invoices: a GSTR-2B portal download and an internal purchase register.
//!
//! # Pipeline
//!
//! - **Normalize**: canonicalize GSTINs and invoice numbers so cosmetic
//!   variants ("INV-001" vs "inv001") compare equal
//! - **Aggregate**: fold duplicate line-records into one record per
//!   (GSTIN, invoice) key, summing monetary fields
//! - **Match**: full outer join of the two aggregated sets on the
//!   composite key
//! - **Classify**: absolute taxable and total-GST differences for matched
//!   pairs, PERFECT within a one-unit tolerance, else MISMATCH
//! - **Report**: four result tables plus a summary, ready for the sink
//!
//! # Examples
//!
//! ## Reconciling two CSV files
//!
//! ```no_run
//! use std::fs::File;
//! use gstrecon::csv_format;
//! use gstrecon::reconcile::reconcile;
//!
//! let mut portal_file = File::open("gstr2b.csv")?;
//! let mut books_file = File::open("purchase_register.csv")?;
//!
//! let portal = csv_format::read_table(&mut portal_file)?;
//! let books = csv_format::read_table(&mut books_file)?;
//!
//! let outcome = reconcile(&portal, &books)?;
//! for (category, count) in outcome.counts.categories() {
//!     println!("{category}: {count}");
//! }
//!
//! csv_format::write_report(&outcome.report, "report/")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod classify;
pub mod csv_format;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod types;

use std::str::FromStr;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{AggregatedRecord, ComparisonRow, MatchStatus, RawRecord, ValueStatus};

/// The two sources being reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Tax-authority record set (GSTR-2B download).
    Portal,
    /// Internal bookkeeping record set (purchase register).
    Books,
}

impl Side {
    /// The required column schema for this source.
    pub fn schema(self) -> &'static source::SourceSchema {
        match self {
            Side::Portal => &source::PORTAL_SCHEMA,
            Side::Books => &source::BOOKS_SCHEMA,
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "portal" | "gstr2b" | "gstr-2b" => Ok(Side::Portal),
            "books" | "register" | "purchase-register" => Ok(Side::Books),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Portal => write!(f, "portal"),
            Side::Books => write!(f, "books"),
        }
    }
}
