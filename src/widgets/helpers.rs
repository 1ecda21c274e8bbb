//! Formatting helpers for addresses, amounts and sizes.

use crate::constants::AMOUNT_DECIMALS;

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address to fit in the given width.
///
/// If the address is longer than `max_len`, it will be truncated with an ellipsis
/// in the middle (e.g., "XdJn...qXg9").
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    let len = addr.chars().count();
    if len <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format an amount with thousands separators and fixed decimals.
///
/// ```ignore
/// assert_eq!(format_amount(1234.5), "1,234.50000000");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.*}", AMOUNT_DECIMALS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if value < 0.0 { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_thousands(int_part))
    }
}

/// Format a number with commas for thousands separators.
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    group_thousands(&n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a size in bytes, or "-" when unknown.
#[must_use]
pub fn format_size(bytes: Option<u64>) -> String {
    bytes.map_or_else(|| "-".to_string(), |b| format!("{} bytes", format_with_commas(b)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let long_addr = "XdJnCKYNwzCz8ATv8Eu75gonaHyfr9qXg9";
        let cases = [
            ("ABCDEFGH", 20, "fits without truncation"),
            ("ABCDEFGHIJ", 10, "exact fit"),
            (long_addr, 20, "truncated with ellipsis"),
            ("ABCDEFGHIJ", 5, "very short max"),
        ];

        for (addr, max_len, desc) in cases {
            let result = truncate_address(addr, max_len);
            assert!(result.len() <= max_len, "{desc}: too long");
            if addr.len() <= max_len {
                assert_eq!(result, addr, "{desc}: should not truncate");
            } else if max_len >= 7 {
                assert!(result.contains("..."), "{desc}: should have ellipsis");
            }
        }
        assert_eq!(truncate_address(long_addr, 11), "XdJn...qXg9");
    }

    #[test]
    fn test_format_amount() {
        let cases = [
            (0.0, "0.00000000"),
            (1.5, "1.50000000"),
            (1234.5, "1,234.50000000"),
            (1_000_000.0, "1,000,000.00000000"),
            (-2.25, "-2.25000000"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_amount(input), expected, "value={input}");
        }
    }

    #[test]
    fn test_format_with_commas() {
        let cases = [
            (0_u64, "0"),
            (999, "999"),
            (1000, "1,000"),
            (1_234_567_890, "1,234,567,890"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_with_commas(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(2345)), "2,345 bytes");
    }
}
