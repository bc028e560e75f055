//! Scalar value helpers
//!
//! Record cells are plain [`serde_json::Value`]s. The functions here are the
//! single place where a cell is interpreted as a number, so column
//! classification and feature normalization always agree on what "numeric"
//! means.

use serde_json::Value;

/// Parse a cell as a finite number.
///
/// - JSON numbers are returned as-is
/// - strings are trimmed and must parse *fully* to a finite `f64`
/// - null, booleans, arrays and objects are never numeric
#[inline]
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Whether a cell counts towards a column's numeric ratio
#[inline]
pub fn is_numeric_like(value: &Value) -> bool {
    parse_number(value).is_some()
}

/// Coerce a cell to a number, falling back to `0.0`
#[inline]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    value.and_then(parse_number).unwrap_or(0.0)
}

/// Render a scalar cell as text.
///
/// Integral numbers drop their fractional part so `1.0` and `1` both read
/// as `"1"`. Null renders as `None`.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", f as i64)),
                    Some(f) => Some(f.to_string()),
                    None => Some(n.to_string()),
                }
            }
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_native_numbers() {
        assert_eq!(parse_number(&json!(30)), Some(30.0));
        assert_eq!(parse_number(&json!(-2.5)), Some(-2.5));
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(parse_number(&json!("35")), Some(35.0));
        assert_eq!(parse_number(&json!("  41.5 ")), Some(41.5));
        assert_eq!(parse_number(&json!("1e3")), Some(1000.0));
    }

    #[test]
    fn test_non_numeric_strings() {
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!("   ")), None);
        assert_eq!(parse_number(&json!("12abc")), None);
        assert_eq!(parse_number(&json!("NaN")), None);
        assert_eq!(parse_number(&json!("inf")), None);
    }

    #[test]
    fn test_other_values_never_numeric() {
        assert!(!is_numeric_like(&Value::Null));
        assert!(!is_numeric_like(&json!(true)));
        assert!(!is_numeric_like(&json!([1, 2])));
        assert!(!is_numeric_like(&json!({"a": 1})));
    }

    #[test]
    fn test_coerce_defaults_to_zero() {
        assert_eq!(coerce_number(None), 0.0);
        assert_eq!(coerce_number(Some(&Value::Null)), 0.0);
        assert_eq!(coerce_number(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_number(Some(&json!(true))), 0.0);
        assert_eq!(coerce_number(Some(&json!("7"))), 7.0);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(&json!("Yes")), Some("Yes".to_string()));
        assert_eq!(as_text(&json!(1)), Some("1".to_string()));
        assert_eq!(as_text(&json!(1.0)), Some("1".to_string()));
        assert_eq!(as_text(&json!(0.5)), Some("0.5".to_string()));
        assert_eq!(as_text(&json!(true)), Some("true".to_string()));
        assert_eq!(as_text(&Value::Null), None);
    }
}
