//! GBP currency formatting
//!
//! Amounts are whole pence. The last two digits are always the pence and the
//! remaining digits are the pounds, grouped in threes from the right:
//!
//! | digits | output              |
//! |--------|---------------------|
//! | 1      | `£0.05`             |
//! | 2      | `£0.99`             |
//! | 3      | `£9.99`             |
//! | 4-5    | `£999.99`           |
//! | 6-8    | `£4,999.00`         |
//! | 9-11   | `£499,999.00`       |
//! | 12-14  | `£499,999,999.00`   |
//! | 15+    | `£90,071,992,547,409.91` |
//!
//! Copyright (c) 2025 Revive Team
//! Licensed under the Apache-2.0 license

/// Currency symbol prefixed to every amount
pub const SYMBOL: char = '£';

/// Separator between groups of three pound digits
pub const THOUSANDS_SEPARATOR: char = ',';

/// Separator between pounds and pence
pub const DECIMAL_SEPARATOR: char = '.';

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Format an amount in pence as a GBP string.
///
/// No range check happens here; callers gate on [`MAX_SAFE_INTEGER`]. Larger
/// values still format with the same grouping.
pub fn format_gbp(pennies: u64) -> String {
    // Zero-pad to at least "0" pounds and two pence digits
    let digits = format!("{pennies:03}");
    let (pounds, pence) = digits.split_at(digits.len() - 2);

    let separators = (pounds.len() - 1) / 3;
    let mut out = String::with_capacity(digits.len() + separators + 4);
    out.push(SYMBOL);

    let lead = match pounds.len() % 3 {
        0 => 3,
        n => n,
    };
    let (head, mut rest) = pounds.split_at(lead);
    out.push_str(head);
    while !rest.is_empty() {
        let (group, tail) = rest.split_at(3);
        out.push(THOUSANDS_SEPARATOR);
        out.push_str(group);
        rest = tail;
    }

    out.push(DECIMAL_SEPARATOR);
    out.push_str(pence);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_amounts() {
        assert_eq!(format_gbp(5), "£0.05");
        assert_eq!(format_gbp(99), "£0.99");
        assert_eq!(format_gbp(999), "£9.99");
        assert_eq!(format_gbp(499900), "£4,999.00");
        assert_eq!(format_gbp(49999900), "£499,999.00");
        assert_eq!(format_gbp(49999999900), "£499,999,999.00");
        assert_eq!(format_gbp(49999999999900), "£499,999,999,999.00");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_gbp(0), "£0.00");
    }

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (9, "£0.09"),
            (10, "£0.10"),
            (99, "£0.99"),
            (100, "£1.00"),
            (999, "£9.99"),
            (1_000, "£10.00"),
            (99_999, "£999.99"),
            (100_000, "£1,000.00"),
            (99_999_999, "£999,999.99"),
            (100_000_000, "£1,000,000.00"),
            (99_999_999_999, "£999,999,999.99"),
            (100_000_000_000, "£1,000,000,000.00"),
            (99_999_999_999_999, "£999,999,999,999.99"),
            (100_000_000_000_000, "£1,000,000,000,000.00"),
        ];
        for (pennies, expected) in cases {
            assert_eq!(format_gbp(pennies), expected, "pennies = {pennies}");
        }
    }

    #[test]
    fn test_max_safe_integer() {
        assert_eq!(MAX_SAFE_INTEGER, 9_007_199_254_740_991);
        assert_eq!(format_gbp(MAX_SAFE_INTEGER), "£90,071,992,547,409.91");
    }

    #[test]
    fn test_beyond_safe_range_still_groups() {
        assert_eq!(format_gbp(u64::MAX), "£184,467,440,737,095,516.15");
    }
}
