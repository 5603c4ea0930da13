//! Lenient numeric deserializers for pricing input
//!
//! Pricing input comes straight from form fields, so numbers may arrive as
//! strings, `null`, or garbage. Anything that is not a finite number coerces
//! to `0` instead of failing the whole request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a finite `f64`, defaulting to `0.0`
pub fn number_or_zero(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Coerce a float to a count: fractions truncate, negatives become `0`
pub fn count_or_zero(n: f64) -> u32 {
    if !n.is_finite() || n <= 0.0 {
        return 0;
    }
    if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n.trunc() as u32
    }
}

/// Deserialize `f64`, coercing non-numeric input to `0.0`
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| number_or_zero(&v))
}

/// Deserialize `u32`, coercing non-numeric or negative input to `0`
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| count_or_zero(number_or_zero(&v)))
}

/// Deserialize an optional `f64`: `null` stays `None`, anything else coerces
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| match v {
        Value::Null => None,
        other => Some(number_or_zero(&other)),
    })
}

/// Deserialize a flag that is only set by a literal `true`
pub fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| matches!(v, Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_or_zero() {
        assert_eq!(number_or_zero(&json!(12.5)), 12.5);
        assert_eq!(number_or_zero(&json!(-3)), -3.0);
        assert_eq!(number_or_zero(&json!(" 42 ")), 42.0);
        assert_eq!(number_or_zero(&json!("")), 0.0);
        assert_eq!(number_or_zero(&json!("abc")), 0.0);
        assert_eq!(number_or_zero(&json!("NaN")), 0.0);
        assert_eq!(number_or_zero(&json!("inf")), 0.0);
        assert_eq!(number_or_zero(&json!(null)), 0.0);
        assert_eq!(number_or_zero(&json!(true)), 1.0);
        assert_eq!(number_or_zero(&json!([1, 2])), 0.0);
    }

    #[test]
    fn test_count_or_zero() {
        assert_eq!(count_or_zero(5.0), 5);
        assert_eq!(count_or_zero(5.9), 5);
        assert_eq!(count_or_zero(-2.0), 0);
        assert_eq!(count_or_zero(f64::NAN), 0);
        assert_eq!(count_or_zero(1e12), u32::MAX);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "lenient_u32")]
        count: u32,
        #[serde(default, deserialize_with = "lenient_opt_f64")]
        discount: Option<f64>,
        #[serde(default, deserialize_with = "strict_true")]
        flag: bool,
    }

    #[test]
    fn test_probe_from_form_like_json() {
        let p: Probe = serde_json::from_str(
            r#"{"price":"19.90","count":"3","discount":"x","flag":"true"}"#,
        )
        .unwrap();
        assert_eq!(p.price, 19.9);
        assert_eq!(p.count, 3);
        assert_eq!(p.discount, Some(0.0));
        assert!(!p.flag);
    }

    #[test]
    fn test_probe_missing_fields_default() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.count, 0);
        assert_eq!(p.discount, None);
        assert!(!p.flag);

        let p: Probe = serde_json::from_str(r#"{"discount":null,"flag":true}"#).unwrap();
        assert_eq!(p.discount, None);
        assert!(p.flag);
    }
}
