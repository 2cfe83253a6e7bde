//! Common types used across the reconciliation pipeline.

use crate::normalize::{normalize_gstin, normalize_invoice};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One invoice line-record from either source, after column extraction.
///
/// Monetary fields are already coerced (unparseable text becomes zero) and
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Supplier/vendor GSTIN as it appeared in the source.
    pub gstin: String,

    /// Invoice number as it appeared in the source.
    pub invoice: String,

    /// Invoice date, when the source value was parseable.
    pub date: Option<NaiveDate>,

    /// Counterparty trade/legal or vendor name.
    pub name: String,

    /// Taxable value (pre-tax invoice amount).
    pub taxable: Decimal,

    /// Integrated tax component.
    pub igst: Decimal,

    /// Central tax component.
    pub cgst: Decimal,

    /// State/UT tax component.
    pub sgst: Decimal,
}

impl RawRecord {
    /// Total tax on this record: the sum of all three components.
    pub fn total_gst(&self) -> Decimal {
        self.igst + self.cgst + self.sgst
    }
}

/// The cleaned join key: (GSTIN, invoice number) after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NormalizedKey {
    /// GSTIN, trimmed and uppercased.
    pub gstin: String,

    /// Invoice number with separators removed, uppercased, leading zeros
    /// stripped.
    pub invoice: String,
}

impl NormalizedKey {
    /// Build the key from raw identifier strings.
    pub fn from_raw(gstin: &str, invoice: &str) -> Self {
        Self {
            gstin: normalize_gstin(gstin),
            invoice: normalize_invoice(invoice),
        }
    }

    /// The composite join key. `|` cannot survive normalization in either
    /// component, so two keys collide only if both halves are equal.
    pub fn composite(&self) -> String {
        format!("{}|{}", self.gstin, self.invoice)
    }
}

/// One row per distinct [`NormalizedKey`] within one source.
///
/// Monetary fields are summed across all raw rows sharing the key;
/// name, date, and the original invoice text come from the first row
/// encountered in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// The normalized join key.
    pub key: NormalizedKey,

    /// Representative counterparty name (first-seen).
    pub name: String,

    /// Representative invoice date (first-seen).
    pub date: Option<NaiveDate>,

    /// The pre-normalization invoice string of the first-seen row.
    pub invoice_original: String,

    /// Summed taxable value.
    pub taxable: Decimal,

    /// Summed integrated tax.
    pub igst: Decimal,

    /// Summed central tax.
    pub cgst: Decimal,

    /// Summed state/UT tax.
    pub sgst: Decimal,
}

impl AggregatedRecord {
    /// Total tax: the sum of the three already-summed components.
    pub fn total_gst(&self) -> Decimal {
        self.igst + self.cgst + self.sgst
    }
}

/// Match outcome of one composite key across the two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Key present in both sources.
    Matched,
    /// Key present only in the portal data.
    MissingInBooks,
    /// Key present only in the books data.
    MissingInPortal,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "MATCHED"),
            Self::MissingInBooks => write!(f, "MISSING_IN_BOOKS"),
            Self::MissingInPortal => write!(f, "MISSING_IN_PORTAL"),
        }
    }
}

/// Value agreement of a matched pair under the tolerance rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueStatus {
    /// Both differences within tolerance.
    Perfect,
    /// At least one difference exceeds tolerance.
    Mismatch,
}

impl std::fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Perfect => write!(f, "PERFECT"),
            Self::Mismatch => write!(f, "MISMATCH"),
        }
    }
}

/// Numeric discrepancies of a matched pair. See [`crate::classify`] for the
/// tolerance rule that produces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDiff {
    /// `|taxable_portal - taxable_books|`.
    pub taxable_diff: Decimal,

    /// `|total_gst_portal - total_gst_books|`.
    pub gst_diff: Decimal,

    /// PERFECT or MISMATCH under the tolerance rule.
    pub status: ValueStatus,
}

/// Result of joining the two aggregated record sets on [`NormalizedKey`].
///
/// Differences exist only for matched pairs; they are undefined when one
/// side is absent, and the enum makes that state unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComparisonRow {
    /// Key present in both sources.
    Matched {
        portal: AggregatedRecord,
        books: AggregatedRecord,
        diff: ValueDiff,
    },
    /// Key present only in the portal data.
    MissingInBooks { portal: AggregatedRecord },
    /// Key present only in the books data.
    MissingInPortal { books: AggregatedRecord },
}

impl ComparisonRow {
    /// The match status label for this row.
    pub fn status(&self) -> MatchStatus {
        match self {
            Self::Matched { .. } => MatchStatus::Matched,
            Self::MissingInBooks { .. } => MatchStatus::MissingInBooks,
            Self::MissingInPortal { .. } => MatchStatus::MissingInPortal,
        }
    }

    /// The normalized key of whichever side is present. For matched rows
    /// both sides carry the same key.
    pub fn key(&self) -> &NormalizedKey {
        match self {
            Self::Matched { portal, .. } => &portal.key,
            Self::MissingInBooks { portal } => &portal.key,
            Self::MissingInPortal { books } => &books.key,
        }
    }
}
