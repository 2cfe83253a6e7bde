//! Identifier normalization.
//!
//! The two sources record the same logical invoice under cosmetically
//! different identifiers ("INV-001", "inv 001", "INV001"). Normalization
//! canonicalizes both halves of the join key so such variants compare equal.

/// Characters removed from invoice numbers before comparison.
const INVOICE_STRIP_CHARS: &[char] = &[
    '-', '/', '_', ' ', '.', ',', '@', '#', '$', '%', '^', '&', '*', '(', ')', '[', ']', '{', '}',
];

/// Canonicalize a raw invoice number into a comparable key.
///
/// Trims surrounding whitespace, removes separator/punctuation characters,
/// uppercases, and strips leading zeros. An input that is empty after
/// cleaning (or consists only of zeros) becomes `"0"`, never an empty
/// string. Pure and total: never fails.
///
/// # Examples
///
/// ```
/// use gstrecon::normalize::normalize_invoice;
///
/// assert_eq!(normalize_invoice("INV-001"), "INV001");
/// assert_eq!(normalize_invoice("007"), "7");
/// assert_eq!(normalize_invoice("0000"), "0");
/// ```
pub fn normalize_invoice(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !INVOICE_STRIP_CHARS.contains(c))
        .collect::<String>()
        .to_uppercase();

    let stripped = cleaned.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Canonicalize a raw GSTIN: trim surrounding whitespace and uppercase.
///
/// GSTINs are alphanumeric registration codes, so no character removal or
/// zero-stripping applies.
pub fn normalize_gstin(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invoice_equivalence() {
        assert_eq!(normalize_invoice("INV-001"), normalize_invoice("inv001"));
        assert_eq!(normalize_invoice("INV-001"), normalize_invoice(" INV 001 "));
        assert_eq!(normalize_invoice("inv/2024_07"), normalize_invoice("INV202407"));
    }

    #[test]
    fn test_invoice_punctuation_removed() {
        assert_eq!(normalize_invoice("a@b#c$d%e^f&g*h"), "ABCDEFGH");
        assert_eq!(normalize_invoice("(1)[2]{3}"), "123");
        assert_eq!(normalize_invoice("12.34,56"), "123456");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(normalize_invoice("007"), "7");
        assert_eq!(normalize_invoice("0-0-7"), "7");
        assert_eq!(normalize_invoice("00A01"), "A01");
    }

    #[test]
    fn test_all_zero_collapse() {
        assert_eq!(normalize_invoice("0000"), "0");
        assert_eq!(normalize_invoice("0"), "0");
        assert_eq!(normalize_invoice(""), "0");
        assert_eq!(normalize_invoice("  --  "), "0");
    }

    #[test]
    fn test_invoice_idempotence() {
        for raw in ["INV-001", "007", "0000", "", " inv 001 ", "ab/cd.ef"] {
            let once = normalize_invoice(raw);
            assert_eq!(normalize_invoice(&once), once);
        }
    }

    #[test]
    fn test_gstin_normalization() {
        assert_eq!(normalize_gstin(" 27abcde1234f1z5 "), "27ABCDE1234F1Z5");
        // No zero-stripping or punctuation removal for GSTINs.
        assert_eq!(normalize_gstin("07AAAAA0000A1Z5"), "07AAAAA0000A1Z5");
    }
}
