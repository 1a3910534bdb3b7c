//! Coercion of raw lead fields into canonical typed values.
//!
//! None of these functions fail: anything that cannot be understood maps to the
//! zero value of the target type.

use crate::dataset::RawValue;

/// Lowercased, trimmed industry name, or `""` when missing.
pub fn normalize_industry(value: &RawValue) -> String {
    value
        .as_text()
        .map(|s| s.to_lowercase().trim().to_string())
        .unwrap_or_default()
}

/// Revenue in dollars.
///
/// Accepts plain numbers and strings like "$4.7B", "2.3M", "500K", "1,000,000", "1_000".
/// Suffixes are checked B, then M, then K, so the first one present wins.
pub fn normalize_revenue(value: &RawValue) -> f64 {
    match value {
        RawValue::Missing => 0.0,
        RawValue::Number(n) => non_negative(*n),
        RawValue::Text(s) => {
            let cleaned = s.to_uppercase().replace(['$', ',', '_'], "");

            let (digits, multiplier) = if cleaned.contains('B') {
                (cleaned.replace('B', ""), 1_000_000_000.0)
            } else if cleaned.contains('M') {
                (cleaned.replace('M', ""), 1_000_000.0)
            } else if cleaned.contains('K') {
                (cleaned.replace('K', ""), 1_000.0)
            } else {
                (cleaned, 1.0)
            };

            match digits.trim().parse::<f64>() {
                Ok(n) => non_negative(n * multiplier),
                Err(_) => 0.0,
            }
        }
    }
}

/// Employee count as an integer.
///
/// "100+", "1,200" and "1_200" are understood; for ranges like "50-100" the lower bound is used.
pub fn normalize_employee_count(value: &RawValue) -> u64 {
    match value {
        RawValue::Missing => 0,
        RawValue::Number(n) => truncate(*n),
        RawValue::Text(s) => {
            let cleaned = s.replace(['+', ',', '_'], "");
            let first = match cleaned.split_once('-') {
                Some((low, _)) => low,
                None => cleaned.as_str(),
            };

            match first.trim().parse::<f64>() {
                Ok(n) => truncate(n),
                Err(_) => 0,
            }
        }
    }
}

// NaN, infinities and negatives all collapse to zero
fn non_negative(n: f64) -> f64 {
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

fn truncate(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        n.trunc() as u64
    } else {
        0
    }
}
