//! Full outer join of the two aggregated record sets.

use crate::error::{Error, Result};
use crate::types::{AggregatedRecord, ComparisonRow, ValueDiff};
use crate::Side;
use std::collections::{HashMap, HashSet};

/// Join portal and books aggregates on the composite key.
///
/// Every input record from both sides lands in exactly one output row:
/// keys present on both sides become `Matched` rows (with their value
/// differences computed), portal-only keys become `MissingInBooks`, and
/// books-only keys become `MissingInPortal`. Output order is portal input
/// order followed by the remaining books records in books input order.
///
/// Aggregation guarantees key uniqueness within a side; if a duplicate
/// nevertheless shows up, merging would be undefined, so the join aborts
/// with [`Error::DuplicateKey`].
pub fn match_records(
    portal: Vec<AggregatedRecord>,
    books: Vec<AggregatedRecord>,
) -> Result<Vec<ComparisonRow>> {
    let mut books_by_key: HashMap<String, AggregatedRecord> = HashMap::with_capacity(books.len());
    let mut books_order: Vec<String> = Vec::with_capacity(books.len());

    for record in books {
        let key = record.key.composite();
        if books_by_key.insert(key.clone(), record).is_some() {
            return Err(Error::DuplicateKey {
                side: Side::Books,
                key,
            });
        }
        books_order.push(key);
    }

    let mut portal_seen: HashSet<String> = HashSet::with_capacity(portal.len());
    let mut rows = Vec::with_capacity(portal.len() + books_order.len());

    for record in portal {
        let key = record.key.composite();
        if !portal_seen.insert(key.clone()) {
            return Err(Error::DuplicateKey {
                side: Side::Portal,
                key,
            });
        }

        match books_by_key.remove(&key) {
            Some(books_record) => rows.push(ComparisonRow::Matched {
                diff: ValueDiff::between(&record, &books_record),
                portal: record,
                books: books_record,
            }),
            None => rows.push(ComparisonRow::MissingInBooks { portal: record }),
        }
    }

    for key in books_order {
        if let Some(books_record) = books_by_key.remove(&key) {
            rows.push(ComparisonRow::MissingInPortal {
                books: books_record,
            });
        }
    }

    Ok(rows)
}
