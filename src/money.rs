// 💰 Money Parsing - Monetary strings as integer cents
// Amounts arrive as "D+.DD" text; all arithmetic stays in cents so the
// whole-dollar and multiple-of-0.25 checks are exact (no binary floats).

/// Amount in integer cents
pub type Cents = i64;

/// Parse a "D+.DD" monetary string into cents.
///
/// Returns `None` when the text does not have the digits-dot-two-digits
/// shape or the dollar part overflows. Callers treat `None` as "this amount
/// earns nothing" rather than an error: the shape is normally guaranteed by
/// the validator already.
pub fn parse_cents(text: &str) -> Option<Cents> {
    let (dollars, cents) = text.split_once('.')?;

    if dollars.is_empty() || cents.len() != 2 {
        return None;
    }
    if !dollars.bytes().all(|b| b.is_ascii_digit()) || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let dollars: Cents = dollars.parse().ok()?;
    let cents: Cents = cents.parse().ok()?;

    dollars.checked_mul(100)?.checked_add(cents)
}

/// True when the amount has no cents component (round dollar amount)
pub fn is_whole_dollars(amount: Cents) -> bool {
    amount % 100 == 0
}

/// True when the amount is an exact multiple of 0.25
pub fn is_quarter_multiple(amount: Cents) -> bool {
    amount % 25 == 0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cents_valid() {
        assert_eq!(parse_cents("35.35"), Some(3535));
        assert_eq!(parse_cents("100.00"), Some(10000));
        assert_eq!(parse_cents("0.00"), Some(0));
        assert_eq!(parse_cents("6.49"), Some(649));
        assert_eq!(parse_cents("00012.50"), Some(1250));
    }

    #[test]
    fn test_parse_cents_rejects_bad_shapes() {
        assert_eq!(parse_cents(""), None);
        assert_eq!(parse_cents("35"), None);
        assert_eq!(parse_cents("35."), None);
        assert_eq!(parse_cents(".35"), None);
        assert_eq!(parse_cents("35.5"), None);
        assert_eq!(parse_cents("35.555"), None);
        assert_eq!(parse_cents("3a.00"), None);
        assert_eq!(parse_cents("35.0x"), None);
        assert_eq!(parse_cents("-35.00"), None);
        assert_eq!(parse_cents("35,00"), None);
    }

    #[test]
    fn test_parse_cents_overflow_is_none() {
        assert_eq!(parse_cents("99999999999999999999.99"), None);
    }

    #[test]
    fn test_whole_dollars() {
        assert!(is_whole_dollars(10000));
        assert!(is_whole_dollars(0));
        assert!(!is_whole_dollars(3535));
        assert!(!is_whole_dollars(1050));
    }

    #[test]
    fn test_quarter_multiple() {
        assert!(is_quarter_multiple(10000));
        assert!(is_quarter_multiple(25));
        assert!(is_quarter_multiple(3525));
        assert!(is_quarter_multiple(0));
        assert!(!is_quarter_multiple(3535));
        assert!(!is_quarter_multiple(649));
    }
}
