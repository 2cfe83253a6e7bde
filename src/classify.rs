//! Discrepancy classification for matched pairs.

use crate::types::{AggregatedRecord, ValueDiff, ValueStatus};
use rust_decimal::Decimal;

/// Maximum absolute difference, in currency units, that still counts as a
/// perfect match. Absorbs rounding noise between independently-rounded
/// sources. Inclusive on both ends.
pub const VALUE_TOLERANCE: Decimal = Decimal::ONE;

/// Classify a pair of differences under the tolerance rule.
pub fn value_status(taxable_diff: Decimal, gst_diff: Decimal) -> ValueStatus {
    if taxable_diff <= VALUE_TOLERANCE && gst_diff <= VALUE_TOLERANCE {
        ValueStatus::Perfect
    } else {
        ValueStatus::Mismatch
    }
}

impl ValueDiff {
    /// Compute the absolute taxable and total-tax differences between the
    /// two sides of a matched pair, classified under [`VALUE_TOLERANCE`].
    pub fn between(portal: &AggregatedRecord, books: &AggregatedRecord) -> Self {
        let taxable_diff = (portal.taxable - books.taxable).abs();
        let gst_diff = (portal.total_gst() - books.total_gst()).abs();
        let status = value_status(taxable_diff, gst_diff);

        Self {
            taxable_diff,
            gst_diff,
            status,
        }
    }
}
