//! Source table binding.
//!
//! The external data source hands the pipeline generic tabular data: a
//! header row plus string cells. This module binds the portal and books
//! column schemas to that shape and extracts typed [`RawRecord`]s,
//! coercing unparseable amounts to zero.

use crate::error::{Error, Result};
use crate::types::RawRecord;
use crate::Side;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A generic tabular record set: named columns and string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in order.
    pub headers: Vec<String>,

    /// Data rows. Rows shorter than the header read as empty cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Find a column by name. Header and lookup name are compared after
    /// trimming surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h.trim() == name)
    }
}

/// Required column names for one source.
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    pub gstin: &'static str,
    pub invoice: &'static str,
    pub date: &'static str,
    pub name: &'static str,
    pub taxable: &'static str,
    pub igst: &'static str,
    pub cgst: &'static str,
    pub sgst: &'static str,
}

/// Column headers of a GSTR-2B portal download.
pub const PORTAL_SCHEMA: SourceSchema = SourceSchema {
    gstin: "GSTIN of supplier",
    invoice: "Invoice number",
    date: "Invoice Date",
    name: "Trade/Legal name",
    taxable: "Taxable Value (₹)",
    igst: "Integrated Tax(₹)",
    cgst: "Central Tax(₹)",
    sgst: "State/UT Tax(₹)",
};

/// Column headers of a purchase register export.
pub const BOOKS_SCHEMA: SourceSchema = SourceSchema {
    gstin: "VENDOR GSTIN",
    invoice: "VENDOR INVOICE NO",
    date: "DATE",
    name: "VENDOR NAME",
    taxable: "TAXABLE VALUE",
    igst: "IGST",
    cgst: "CGST",
    sgst: "SGST",
};

/// Records extracted from one source table, with coercion accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The typed records, in source row order.
    pub records: Vec<RawRecord>,

    /// How many non-empty amount cells failed to parse and were treated
    /// as zero.
    pub coerced_numerics: usize,
}

/// Extract typed records from a source table.
///
/// Fails fast with [`Error::MissingColumn`] if any required column is
/// absent, before any record is produced. Amount cells that cannot be
/// parsed are coerced to zero; the non-empty ones among them are counted
/// in [`Extraction::coerced_numerics`]. Unparseable dates become `None`.
pub fn extract_records(table: &Table, side: Side) -> Result<Extraction> {
    let schema = side.schema();
    let column = |name: &'static str| -> Result<usize> {
        table.column_index(name).ok_or_else(|| Error::MissingColumn {
            side,
            column: name.to_string(),
        })
    };

    let gstin_col = column(schema.gstin)?;
    let invoice_col = column(schema.invoice)?;
    let date_col = column(schema.date)?;
    let name_col = column(schema.name)?;
    let taxable_col = column(schema.taxable)?;
    let igst_col = column(schema.igst)?;
    let cgst_col = column(schema.cgst)?;
    let sgst_col = column(schema.sgst)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut coerced_numerics = 0;

    for row in &table.rows {
        let mut amount = |idx: usize| -> Decimal {
            let raw = cell(row, idx);
            match parse_amount(raw) {
                Some(value) => value,
                None => {
                    if !raw.trim().is_empty() {
                        coerced_numerics += 1;
                    }
                    Decimal::ZERO
                }
            }
        };

        let taxable = amount(taxable_col);
        let igst = amount(igst_col);
        let cgst = amount(cgst_col);
        let sgst = amount(sgst_col);

        records.push(RawRecord {
            gstin: cell(row, gstin_col).to_string(),
            invoice: cell(row, invoice_col).to_string(),
            date: parse_date(cell(row, date_col)),
            name: cell(row, name_col).trim().to_string(),
            taxable,
            igst,
            cgst,
            sgst,
        });
    }

    Ok(Extraction {
        records,
        coerced_numerics,
    })
}

/// Read one cell; indexes past the end of a short row read as empty.
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Parse an amount cell into a two-decimal value.
///
/// Strips the rupee sign, digit-grouping commas, and spaces before parsing.
/// Returns `None` for empty or unparseable cells.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw
        .trim()
        .replace('₹', "")
        .replace(',', "")
        .replace(' ', "");

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok().map(|d| d.round_dp(2))
}

/// Parse a date cell against the formats seen in GST report exports.
/// Dates are representative metadata only, so failures are not fatal.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let formats = [
        "%d-%m-%Y", // 01-04-2024
        "%d/%m/%Y", // 01/04/2024
        "%Y-%m-%d", // 2024-04-01
        "%d.%m.%Y", // 01.04.2024
        "%d-%b-%Y", // 01-Apr-2024
    ];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    None
}
