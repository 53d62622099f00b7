//! Numeric hero attributes (height, weight).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A numeric attribute as it appeared in the source plus its parsed value.
///
/// The raw text is kept for display; aggregations only read `value`.
/// The dataset marks unknown measurements with non-positive sentinels
/// (usually `-99`), so `value <= 0.0` means "invalid".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub raw: String,
    pub value: f64,
}

impl Measurement {
    pub fn from_number(value: f64) -> Self {
        Self {
            raw: format!("{value:?}"),
            value,
        }
    }

    /// Parse source text leniently: the leading numeric prefix is used and
    /// text without one yields `0.0`.
    pub fn from_text(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: parse_leading_f64(raw),
        }
    }

    /// Convert a JSON value. Null and non-scalar values carry no measurement.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => Some(Self {
                raw: number.to_string(),
                value: number.as_f64().unwrap_or(0.0),
            }),
            Value::String(text) => Some(Self::from_text(text)),
            _ => None,
        }
    }

    /// True when the value is strictly positive.
    pub fn is_valid(&self) -> bool {
        self.value > 0.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Numeric value of an optional measurement; absent counts as zero.
pub fn value_or_zero(measurement: Option<&Measurement>) -> f64 {
    measurement.map_or(0.0, |m| m.value)
}

/// Parse the longest numeric prefix of `text` (after leading whitespace).
pub fn parse_leading_f64(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse().unwrap_or(0.0)
}
