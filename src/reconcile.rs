//! End-to-end reconciliation pipeline.
//!
//! Runs extraction, aggregation, matching, and report assembly as one
//! batch transform. Each stage consumes the complete output of the
//! previous one; a failed stage aborts the run with no partial report.

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::matcher::match_records;
use crate::report::{assemble, ReportBundle, SummaryCounts};
use crate::source::{extract_records, Table};
use crate::types::ComparisonRow;
use crate::Side;

/// The result of one reconciliation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationOutcome {
    /// Every comparison row, one per distinct composite key.
    pub rows: Vec<ComparisonRow>,

    /// The five sink-ready report tables.
    pub report: ReportBundle,

    /// Result-set counts in fixed category order.
    pub counts: SummaryCounts,

    /// Non-empty portal amount cells coerced to zero.
    pub portal_coerced: usize,

    /// Non-empty books amount cells coerced to zero.
    pub books_coerced: usize,
}

/// Reconcile a portal table against a books table.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use gstrecon::csv_format;
/// use gstrecon::reconcile::reconcile;
///
/// let mut portal_file = File::open("gstr2b.csv")?;
/// let mut books_file = File::open("purchase_register.csv")?;
///
/// let portal = csv_format::read_table(&mut portal_file)?;
/// let books = csv_format::read_table(&mut books_file)?;
///
/// let outcome = reconcile(&portal, &books)?;
/// println!("{} perfect matches", outcome.counts.perfect);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn reconcile(portal: &Table, books: &Table) -> Result<ReconciliationOutcome> {
    let portal_extraction = extract_records(portal, Side::Portal)?;
    let books_extraction = extract_records(books, Side::Books)?;

    let portal_aggregates = aggregate(&portal_extraction.records);
    let books_aggregates = aggregate(&books_extraction.records);

    let rows = match_records(portal_aggregates, books_aggregates)?;
    let (report, counts) = assemble(&rows);

    Ok(ReconciliationOutcome {
        rows,
        report,
        counts,
        portal_coerced: portal_extraction.coerced_numerics,
        books_coerced: books_extraction.coerced_numerics,
    })
}
