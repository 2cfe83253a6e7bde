//! Record aggregation.
//!
//! Sources often split one logical invoice across several line-records
//! (per-rate tax lines, credit lines). Aggregation folds them into one
//! record per normalized key, summing the monetary fields and keeping the
//! first-seen row's metadata as the representative.

use crate::types::{AggregatedRecord, NormalizedKey, RawRecord};
use std::collections::HashMap;

/// Group records by normalized key, summing monetary fields.
///
/// Groups are emitted in the order their first member appears, and
/// "first-seen" for the representative name, date, and original invoice
/// text follows input row order, so the output is deterministic for a
/// given input sequence.
pub fn aggregate(records: &[RawRecord]) -> Vec<AggregatedRecord> {
    let mut index: HashMap<NormalizedKey, usize> = HashMap::new();
    let mut groups: Vec<AggregatedRecord> = Vec::new();

    for record in records {
        let key = NormalizedKey::from_raw(&record.gstin, &record.invoice);
        match index.get(&key) {
            Some(&at) => {
                let group = &mut groups[at];
                group.taxable += record.taxable;
                group.igst += record.igst;
                group.cgst += record.cgst;
                group.sgst += record.sgst;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AggregatedRecord {
                    key,
                    name: record.name.clone(),
                    date: record.date,
                    invoice_original: record.invoice.clone(),
                    taxable: record.taxable,
                    igst: record.igst,
                    cgst: record.cgst,
                    sgst: record.sgst,
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn raw(gstin: &str, invoice: &str, taxable: &str, igst: &str) -> RawRecord {
        RawRecord {
            gstin: gstin.into(),
            invoice: invoice.into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1),
            name: format!("Vendor {gstin}"),
            taxable: Decimal::from_str(taxable).unwrap(),
            igst: Decimal::from_str(igst).unwrap(),
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
        }
    }

    #[test]
    fn test_duplicates_are_summed() {
        let records = vec![
            raw("27ABCDE1234F1Z5", "INV-001", "100.00", "18.00"),
            raw("27ABCDE1234F1Z5", "inv001", "50.00", "9.00"),
            raw("27ABCDE1234F1Z5", "INV-002", "200.00", "36.00"),
        ];

        let groups = aggregate(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].taxable.to_string(), "150.00");
        assert_eq!(groups[0].igst.to_string(), "27.00");
        assert_eq!(groups[1].taxable.to_string(), "200.00");
    }

    #[test]
    fn test_first_seen_representative_fields() {
        let mut second = raw("27ABCDE1234F1Z5", "1", "50.00", "9.00");
        second.name = "Renamed Vendor".into();
        second.date = NaiveDate::from_ymd_opt(2024, 5, 2);

        let first = raw("27ABCDE1234F1Z5", "0001", "100.00", "18.00");
        let groups = aggregate(&[first.clone(), second]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, first.name);
        assert_eq!(groups[0].date, first.date);
        assert_eq!(groups[0].invoice_original, "0001");
        assert_eq!(groups[0].taxable.to_string(), "150.00");
    }

    #[test]
    fn test_sum_preserved_across_grouping() {
        let records = vec![
            raw("27ABCDE1234F1Z5", "1", "10.00", "1.80"),
            raw("27ABCDE1234F1Z5", "1", "20.00", "3.60"),
            raw("29FGHIJ5678K2Z9", "2", "30.00", "5.40"),
        ];

        let input_total: Decimal = records.iter().map(|r| r.taxable).sum();
        let output_total: Decimal = aggregate(&records).iter().map(|g| g.taxable).sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn test_group_order_follows_first_appearance() {
        let records = vec![
            raw("B", "2", "1.00", "0"),
            raw("A", "1", "1.00", "0"),
            raw("B", "2", "1.00", "0"),
        ];

        let groups = aggregate(&records);
        assert_eq!(groups[0].key.gstin, "B");
        assert_eq!(groups[1].key.gstin, "A");
    }

    #[test]
    fn test_zero_amount_group_still_emitted() {
        let records = vec![raw("27ABCDE1234F1Z5", "1", "0", "0")];
        let groups = aggregate(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].taxable, Decimal::ZERO);
        assert_eq!(groups[0].total_gst(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), Vec::new());
    }
}
