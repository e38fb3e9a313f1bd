//! Numeric coercion and compact number formatting.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::{ConvertError, NOT_AVAILABLE};

/// Suffixes for successive powers of 1000. Values past the last tier
/// fall back to a single `P` (quadrillion-scale) suffix.
const UNIT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// A numeric value as it arrives from the analytics API or user input:
/// a number, a numeric string, or nothing at all.
///
/// API fields are not reliably typed — the same field may carry `12.5`,
/// `"12.5"` or `null` between responses — so callers convert through
/// this union instead of assuming a concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// A signed integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// Text that may or may not parse as a number.
    Text(String),

    /// No value (JSON `null`, absent field, `None`).
    Missing,
}

impl Numeric {
    /// Converts the value to `f64`, the single coercion step shared by
    /// all numeric formatting.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingValue`] for [`Numeric::Missing`]
    /// and [`ConvertError::NotNumeric`] for text that does not parse or
    /// for non-finite floats (NaN and infinities never belong in chat
    /// output).
    pub fn as_f64(&self) -> Result<f64, ConvertError> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Ok(*n as f64),
            Self::Float(f) if f.is_finite() => Ok(*f),
            Self::Float(f) => Err(ConvertError::NotNumeric {
                input: f.to_string(),
            }),
            Self::Text(s) => match s.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(f),
                _ => Err(ConvertError::NotNumeric { input: s.clone() }),
            },
            Self::Missing => Err(ConvertError::MissingValue),
        }
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Numeric {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Numeric {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for Numeric {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Float(n as f64), Self::Int)
    }
}

impl From<f64> for Numeric {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Numeric {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Numeric {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Numeric>> From<Option<T>> for Numeric {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<&Value> for Numeric {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Missing),
            Value::String(s) => Self::Text(s.clone()),
            Value::Null => Self::Missing,
            // Booleans, arrays and objects are never numbers; let the
            // coercion step report them.
            other => Self::Text(other.to_string()),
        }
    }
}

/// Formats a value as a compact human-readable number: two decimals
/// plus a magnitude suffix (`999.99`, `1.50K`, `2.50M`, `3.40B`,
/// `1.20T`, then `P` for anything larger).
///
/// Negative values keep their sign; the suffix is chosen by absolute
/// value.
///
/// # Errors
///
/// Returns a [`ConvertError`] when the input cannot be coerced to a
/// finite number.
pub fn try_format_number(value: impl Into<Numeric>) -> Result<String, ConvertError> {
    let mut n = value.into().as_f64()?;

    for suffix in UNIT_SUFFIXES {
        if n.abs() < 1000.0 {
            return Ok(format!("{n:.2}{suffix}"));
        }
        n /= 1000.0;
    }

    Ok(format!("{n:.2}P"))
}

/// Fail-soft variant of [`try_format_number`] for message templates:
/// anything that cannot be formatted renders as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_number(value: impl Into<Numeric>) -> String {
    match try_format_number(value) {
        Ok(formatted) => formatted,
        Err(e) => {
            debug!("formatting number failed: {e}");
            NOT_AVAILABLE.to_owned()
        }
    }
}

/// Serde adapter for sloppy float fields: accepts a number, a numeric
/// string or `null`, and falls back to `0.0` for anything else.
///
/// Combine with `#[serde(default)]` so absent fields also read as zero.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Numeric::from(&value).as_f64().unwrap_or_default())
}

/// Serde adapter for sloppy count fields: accepts a non-negative
/// integer, an integer string or `null`, and falls back to `0`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_below_one_thousand() {
        assert_eq!(format_number(0), "0.00");
        assert_eq!(format_number(1), "1.00");
        assert_eq!(format_number(999), "999.00");
        assert_eq!(format_number(12.3), "12.30");
    }

    #[test]
    fn test_format_suffix_tiers() {
        assert_eq!(format_number(1_500), "1.50K");
        assert_eq!(format_number(2_500_000), "2.50M");
        assert_eq!(format_number(3_400_000_000_i64), "3.40B");
        assert_eq!(format_number(1_200_000_000_000_i64), "1.20T");
    }

    #[test]
    fn test_format_quadrillion_fallback() {
        assert_eq!(format_number(1_000_000_000_000_000_i64), "1.00P");
        assert_eq!(format_number(2.5e15), "2.50P");
        // The fallback does not keep dividing: past the last tier the
        // displayed magnitude may exceed 1000.
        assert_eq!(format_number(1e18), "1000.00P");
    }

    #[test]
    fn test_format_negative_preserves_sign() {
        assert_eq!(format_number(-1_500), "-1.50K");
        assert_eq!(format_number(-12), "-12.00");
        assert_eq!(format_number(-2_500_000.0), "-2.50M");
    }

    #[test]
    fn test_format_numeric_strings() {
        assert_eq!(format_number("1500"), "1.50K");
        assert_eq!(format_number(" 42.5 "), "42.50");
        assert_eq!(format_number("1234567".to_owned()), "1.23M");
    }

    #[test]
    fn test_format_sentinel_on_bad_input() {
        assert_eq!(format_number("not a number"), "N/A");
        assert_eq!(format_number(""), "N/A");
        assert_eq!(format_number(None::<f64>), "N/A");
        assert_eq!(format_number(f64::NAN), "N/A");
        assert_eq!(format_number(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_try_format_reports_typed_errors() {
        assert!(matches!(
            try_format_number("abc"),
            Err(ConvertError::NotNumeric { .. })
        ));
        assert!(matches!(
            try_format_number(None::<i64>),
            Err(ConvertError::MissingValue)
        ));
    }

    #[test]
    fn test_displayed_magnitude_always_below_tier_bound() {
        // Every value below the P fallback shows a magnitude < 1000.
        for n in [1_i64, 999, 1_000, 999_999, 1_000_000, 987_654_321_099] {
            let formatted = try_format_number(n).unwrap();
            let digits: String = formatted
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            let magnitude: f64 = digits.parse().unwrap();
            assert!(magnitude.abs() < 1000.0, "{formatted} from {n}");
        }
    }

    #[test]
    fn test_numeric_from_json_value() {
        assert_eq!(Numeric::from(&serde_json::json!(42)), Numeric::Int(42));
        assert_eq!(Numeric::from(&serde_json::json!(1.5)), Numeric::Float(1.5));
        assert_eq!(
            Numeric::from(&serde_json::json!("7.25")),
            Numeric::Text("7.25".to_owned())
        );
        assert_eq!(Numeric::from(&Value::Null), Numeric::Missing);
        assert!(Numeric::from(&serde_json::json!(true)).as_f64().is_err());
    }

    #[test]
    fn test_lenient_f64_adapter() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "super::lenient_f64")]
            value: f64,
        }

        let number: Row = serde_json::from_str(r#"{"value": 3.5}"#).unwrap();
        assert!((number.value - 3.5).abs() < f64::EPSILON);

        let text: Row = serde_json::from_str(r#"{"value": "3.5"}"#).unwrap();
        assert!((text.value - 3.5).abs() < f64::EPSILON);

        let null: Row = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(null.value.abs() < f64::EPSILON);

        let absent: Row = serde_json::from_str("{}").unwrap();
        assert!(absent.value.abs() < f64::EPSILON);
    }
}
