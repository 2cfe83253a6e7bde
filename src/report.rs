//! Report assembly.
//!
//! Partitions the classified comparison rows into the four result sets the
//! reconciliation report is built from, and projects each onto its fixed
//! column schema for the external sink.

use crate::types::{ComparisonRow, ValueStatus};
use rust_decimal::Decimal;

/// Column schema of the summary table.
pub const SUMMARY_COLUMNS: &[&str] = &["Category", "Count"];

/// Column schema of the perfect-match table.
pub const PERFECT_COLUMNS: &[&str] = &[
    "GSTIN",
    "Invoice_No",
    "Supplier",
    "Taxable_Value",
    "CGST",
    "SGST",
    "IGST",
    "Total_GST",
];

/// Column schema of the value-mismatch table.
pub const MISMATCH_COLUMNS: &[&str] = &[
    "GSTIN",
    "Invoice_No",
    "Supplier",
    "Taxable_Portal",
    "Taxable_Books",
    "Taxable_Diff",
    "GST_Portal",
    "GST_Books",
    "GST_Diff",
];

/// Column schema of the missing-in-books table (portal-side values).
pub const MISSING_IN_BOOKS_COLUMNS: &[&str] =
    &["GSTIN", "Invoice_No", "Supplier", "Taxable_Value", "Total_GST"];

/// Column schema of the missing-in-portal table (books-side values).
pub const MISSING_IN_PORTAL_COLUMNS: &[&str] =
    &["GSTIN", "Invoice_No", "Vendor", "Taxable_Value", "Total_GST"];

/// A table ready for the external sink: a name, a fixed column schema, and
/// string cells. A zero-row table still carries its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    /// Sink-facing table name.
    pub name: &'static str,

    /// Column names, in order.
    pub columns: &'static [&'static str],

    /// Data rows, one cell per column.
    pub rows: Vec<Vec<String>>,
}

/// Counts of each result set, in the report's fixed category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub perfect: usize,
    pub mismatch: usize,
    pub missing_in_books: usize,
    pub missing_in_portal: usize,
}

impl SummaryCounts {
    /// Category label / count pairs in fixed order.
    pub fn categories(&self) -> [(&'static str, usize); 4] {
        [
            ("Perfect Match", self.perfect),
            ("Value Mismatch", self.mismatch),
            ("Missing in Books", self.missing_in_books),
            ("Missing in Portal", self.missing_in_portal),
        ]
    }

    /// Total number of classified rows.
    pub fn total(&self) -> usize {
        self.perfect + self.mismatch + self.missing_in_books + self.missing_in_portal
    }
}

/// The complete reconciliation report: summary plus four result tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBundle {
    pub summary: NamedTable,
    pub perfect: NamedTable,
    pub mismatch: NamedTable,
    pub missing_in_books: NamedTable,
    pub missing_in_portal: NamedTable,
}

impl ReportBundle {
    /// All five tables, in sink order.
    pub fn tables(&self) -> [&NamedTable; 5] {
        [
            &self.summary,
            &self.perfect,
            &self.mismatch,
            &self.missing_in_books,
            &self.missing_in_portal,
        ]
    }
}

/// Partition classified rows into the four result sets and build the
/// report tables.
///
/// The partition is exhaustive and mutually exclusive: every row lands in
/// exactly one subset, in its input order.
pub fn assemble(rows: &[ComparisonRow]) -> (ReportBundle, SummaryCounts) {
    let mut perfect = Vec::new();
    let mut mismatch = Vec::new();
    let mut missing_in_books = Vec::new();
    let mut missing_in_portal = Vec::new();

    for row in rows {
        match row {
            ComparisonRow::Matched { portal, diff, .. } if diff.status == ValueStatus::Perfect => {
                perfect.push(vec![
                    portal.key.gstin.clone(),
                    portal.key.invoice.clone(),
                    portal.name.clone(),
                    amount(portal.taxable),
                    amount(portal.cgst),
                    amount(portal.sgst),
                    amount(portal.igst),
                    amount(portal.total_gst()),
                ]);
            }
            ComparisonRow::Matched {
                portal,
                books,
                diff,
            } => {
                mismatch.push(vec![
                    portal.key.gstin.clone(),
                    portal.key.invoice.clone(),
                    portal.name.clone(),
                    amount(portal.taxable),
                    amount(books.taxable),
                    amount(diff.taxable_diff),
                    amount(portal.total_gst()),
                    amount(books.total_gst()),
                    amount(diff.gst_diff),
                ]);
            }
            ComparisonRow::MissingInBooks { portal } => {
                missing_in_books.push(vec![
                    portal.key.gstin.clone(),
                    portal.key.invoice.clone(),
                    portal.name.clone(),
                    amount(portal.taxable),
                    amount(portal.total_gst()),
                ]);
            }
            ComparisonRow::MissingInPortal { books } => {
                missing_in_portal.push(vec![
                    books.key.gstin.clone(),
                    books.key.invoice.clone(),
                    books.name.clone(),
                    amount(books.taxable),
                    amount(books.total_gst()),
                ]);
            }
        }
    }

    let counts = SummaryCounts {
        perfect: perfect.len(),
        mismatch: mismatch.len(),
        missing_in_books: missing_in_books.len(),
        missing_in_portal: missing_in_portal.len(),
    };

    let summary_rows = counts
        .categories()
        .into_iter()
        .map(|(category, count)| vec![category.to_string(), count.to_string()])
        .collect();

    let bundle = ReportBundle {
        summary: NamedTable {
            name: "Summary",
            columns: SUMMARY_COLUMNS,
            rows: summary_rows,
        },
        perfect: NamedTable {
            name: "Perfect_Match",
            columns: PERFECT_COLUMNS,
            rows: perfect,
        },
        mismatch: NamedTable {
            name: "Value_Mismatch",
            columns: MISMATCH_COLUMNS,
            rows: mismatch,
        },
        missing_in_books: NamedTable {
            name: "Missing_in_Books",
            columns: MISSING_IN_BOOKS_COLUMNS,
            rows: missing_in_books,
        },
        missing_in_portal: NamedTable {
            name: "Missing_in_Portal",
            columns: MISSING_IN_PORTAL_COLUMNS,
            rows: missing_in_portal,
        },
    };

    (bundle, counts)
}

/// Render an amount with two decimal places.
fn amount(value: Decimal) -> String {
    let mut value = value;
    value.rescale(2);
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AggregatedRecord, NormalizedKey, ValueDiff};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn agg(gstin: &str, invoice: &str, taxable: &str, igst: &str) -> AggregatedRecord {
        AggregatedRecord {
            key: NormalizedKey::from_raw(gstin, invoice),
            name: format!("Vendor {gstin}"),
            date: None,
            invoice_original: invoice.into(),
            taxable: Decimal::from_str(taxable).unwrap(),
            igst: Decimal::from_str(igst).unwrap(),
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
        }
    }

    fn matched(gstin: &str, invoice: &str, portal_taxable: &str, books_taxable: &str) -> ComparisonRow {
        let portal = agg(gstin, invoice, portal_taxable, "0");
        let books = agg(gstin, invoice, books_taxable, "0");
        ComparisonRow::Matched {
            diff: ValueDiff::between(&portal, &books),
            portal,
            books,
        }
    }

    #[test]
    fn test_partition_is_exhaustive_and_exclusive() {
        let rows = vec![
            matched("A", "1", "100.00", "100.00"),
            matched("A", "2", "100.00", "250.00"),
            ComparisonRow::MissingInBooks {
                portal: agg("A", "3", "10.00", "0"),
            },
            ComparisonRow::MissingInPortal {
                books: agg("B", "4", "20.00", "0"),
            },
        ];

        let (bundle, counts) = assemble(&rows);
        assert_eq!(counts.perfect, 1);
        assert_eq!(counts.mismatch, 1);
        assert_eq!(counts.missing_in_books, 1);
        assert_eq!(counts.missing_in_portal, 1);
        assert_eq!(counts.total(), rows.len());

        assert_eq!(bundle.perfect.rows.len(), 1);
        assert_eq!(bundle.mismatch.rows.len(), 1);
        assert_eq!(bundle.missing_in_books.rows.len(), 1);
        assert_eq!(bundle.missing_in_portal.rows.len(), 1);
    }

    #[test]
    fn test_summary_fixed_order() {
        let (bundle, _) = assemble(&[]);
        let categories: Vec<&str> = bundle
            .summary
            .rows
            .iter()
            .map(|row| row[0].as_str())
            .collect();
        assert_eq!(
            categories,
            vec![
                "Perfect Match",
                "Value Mismatch",
                "Missing in Books",
                "Missing in Portal"
            ]
        );
        assert_eq!(bundle.summary.columns, SUMMARY_COLUMNS);
    }

    #[test]
    fn test_empty_subsets_keep_schema() {
        let (bundle, counts) = assemble(&[]);
        assert_eq!(counts.total(), 0);
        for table in bundle.tables() {
            assert!(!table.columns.is_empty());
        }
        assert_eq!(bundle.perfect.rows, Vec::<Vec<String>>::new());
        assert_eq!(bundle.perfect.columns, PERFECT_COLUMNS);
    }

    #[test]
    fn test_mismatch_row_projection() {
        let rows = vec![matched("27ABCDE1234F1Z5", "INV-1", "100.00", "250.00")];
        let (bundle, _) = assemble(&rows);

        let row = &bundle.mismatch.rows[0];
        assert_eq!(row.len(), MISMATCH_COLUMNS.len());
        assert_eq!(row[0], "27ABCDE1234F1Z5");
        assert_eq!(row[1], "INV1");
        assert_eq!(row[3], "100.00");
        assert_eq!(row[4], "250.00");
        assert_eq!(row[5], "150.00");
    }

    #[test]
    fn test_missing_in_portal_uses_books_side() {
        let rows = vec![ComparisonRow::MissingInPortal {
            books: agg("29FGHIJ5678K2Z9", "7", "500.00", "90.00"),
        }];
        let (bundle, _) = assemble(&rows);

        let row = &bundle.missing_in_portal.rows[0];
        assert_eq!(row[0], "29FGHIJ5678K2Z9");
        assert_eq!(row[2], "Vendor 29FGHIJ5678K2Z9");
        assert_eq!(row[3], "500.00");
        assert_eq!(row[4], "90.00");
    }
}
