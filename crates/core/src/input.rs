//! Lenient parsing of externally supplied numbers.
//!
//! Durations, areas, flow rates, and budgets arrive from forms and JSON
//! clients as either numbers or strings. Blank or unparseable values never
//! fail a request: they collapse to a default (usually zero) or to `None`
//! when the caller wants to skip the entry.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw numeric field as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    /// A JSON number.
    Number(serde_json::Number),
    /// Free text, typically straight from a form field.
    Text(String),
}

impl LooseValue {
    /// Returns the raw textual form of the value.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Parses the value as a decimal.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.as_text())
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Parses a decimal, returning `None` for blank or malformed input.
///
/// Accepts plain (`"12.5"`) and scientific (`"1.25e1"`) notation. Digits
/// past the 28th decimal place are rounded away. A magnitude that does not
/// fit a `Decimal` (above about 7.9e28) is treated as malformed, so
/// [`decimal_or`] falls back to its default for it.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses an optional raw value as a decimal, falling back to `default`.
#[must_use]
pub fn decimal_or(raw: Option<&LooseValue>, default: Decimal) -> Decimal {
    raw.and_then(LooseValue::to_decimal).unwrap_or(default)
}

/// Parses an optional raw value as a decimal, keeping absence as `None`.
#[must_use]
pub fn optional_decimal(raw: Option<&LooseValue>) -> Option<Decimal> {
    raw.and_then(LooseValue::to_decimal)
}

/// Parses an optional raw value as an integer, falling back to `default`.
///
/// Fractional input such as `"2.5"` is rejected rather than truncated.
#[must_use]
pub fn int_or(raw: Option<&LooseValue>, default: i32) -> i32 {
    raw.and_then(|value| value.as_text().trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_accepts_plain_and_scientific() {
        assert_eq!(parse_decimal("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_decimal("  30 "), Some(dec!(30)));
        assert_eq!(parse_decimal("1.25e1"), Some(dec!(12.5)));
        assert_eq!(parse_decimal("-4"), Some(dec!(-4)));
    }

    #[test]
    fn test_parse_decimal_rejects_blank_and_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("ten"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn test_parse_decimal_out_of_range() {
        assert_eq!(parse_decimal("1e40"), None);
        assert_eq!(parse_decimal("123456789012345678901234567890123"), None);
        assert!(parse_decimal("0.333333333333333333333333333333333").is_some());

        let huge = LooseValue::from("123456789012345678901234567890123");
        assert_eq!(decimal_or(Some(&huge), dec!(7)), dec!(7));
    }

    #[test]
    fn test_decimal_or_defaults() {
        let text = LooseValue::from("abc");
        let number = LooseValue::from(42_i64);

        assert_eq!(decimal_or(None, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(decimal_or(Some(&text), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(decimal_or(Some(&number), Decimal::ZERO), dec!(42));
    }

    #[test]
    fn test_optional_decimal() {
        assert_eq!(optional_decimal(Some(&LooseValue::from("2.5"))), Some(dec!(2.5)));
        assert_eq!(optional_decimal(Some(&LooseValue::from(""))), None);
        assert_eq!(optional_decimal(None), None);
    }

    #[test]
    fn test_int_or() {
        assert_eq!(int_or(Some(&LooseValue::from("4")), 0), 4);
        assert_eq!(int_or(Some(&LooseValue::from(7_i64)), 0), 7);
        assert_eq!(int_or(Some(&LooseValue::from("2.5")), 0), 0);
        assert_eq!(int_or(Some(&LooseValue::from("")), 3), 3);
        assert_eq!(int_or(None, 1), 1);
    }

    #[test]
    fn test_loose_value_deserializes_numbers_and_strings() {
        let values: Vec<LooseValue> = serde_json::from_str(r#"[15, "15", 2.5, ""]"#).unwrap();

        assert_eq!(values[0].to_decimal(), Some(dec!(15)));
        assert_eq!(values[1].to_decimal(), Some(dec!(15)));
        assert_eq!(values[2].to_decimal(), Some(dec!(2.5)));
        assert_eq!(values[3].to_decimal(), None);
    }
}
