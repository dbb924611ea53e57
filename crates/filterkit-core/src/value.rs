use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A value handed to a filter by the rendering layer.
///
/// Filters accept anything that coerces to a string. `Null` stands in for an
/// absent value (null, undefined, a missing field).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// Explicit emptiness predicate: null, `false`, numeric zero, NaN and the
    /// empty string. A whitespace-only string is not empty.
    pub fn is_empty_input(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Bool(value) => !value,
            FilterValue::Number(value) => *value == 0.0 || value.is_nan(),
            FilterValue::Text(value) => value.is_empty(),
        }
    }

    /// Numeric view of the value. Null and blank text read as zero; text that
    /// does not parse as a number (and NaN itself) yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            FilterValue::Null => 0.0,
            FilterValue::Bool(value) => f64::from(u8::from(*value)),
            FilterValue::Number(value) => *value,
            FilterValue::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        if number.is_nan() {
            None
        } else {
            Some(number)
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Null => Ok(()),
            FilterValue::Bool(value) => write!(f, "{}", value),
            FilterValue::Number(value) => f.write_str(&display_number(*value)),
            FilterValue::Text(value) => f.write_str(value),
        }
    }
}

fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero.
        return "0".to_string();
    }
    value.to_string()
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::Text(value.clone())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Number(f64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Number(f64::from(value))
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<u64> for FilterValue {
    fn from(value: u64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::Null, Into::into)
    }
}

impl From<&Value> for FilterValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FilterValue::Null,
            Value::Bool(value) => FilterValue::Bool(*value),
            Value::Number(number) => number
                .as_f64()
                .map_or_else(|| FilterValue::Text(number.to_string()), FilterValue::Number),
            Value::String(value) => FilterValue::Text(value.clone()),
            Value::Array(_) | Value::Object(_) => FilterValue::Text(value.to_string()),
        }
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(value) => FilterValue::Text(value),
            other => FilterValue::from(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterValue;
    use serde_json::json;

    #[test]
    fn emptiness_covers_null_zero_and_empty_text() {
        assert!(FilterValue::Null.is_empty_input());
        assert!(FilterValue::from("").is_empty_input());
        assert!(FilterValue::from(0).is_empty_input());
        assert!(FilterValue::from(f64::NAN).is_empty_input());
        assert!(FilterValue::from(false).is_empty_input());
        assert!(FilterValue::from(None::<&str>).is_empty_input());
    }

    #[test]
    fn whitespace_text_is_not_empty() {
        assert!(!FilterValue::from("   ").is_empty_input());
        assert!(!FilterValue::from("0").is_empty_input());
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(FilterValue::from(5555555555_i64).to_string(), "5555555555");
        assert_eq!(FilterValue::from(1.5).to_string(), "1.5");
        assert_eq!(FilterValue::from(-0.0).to_string(), "0");
        assert_eq!(FilterValue::Null.to_string(), "");
    }

    #[test]
    fn as_number_parses_text_and_rejects_garbage() {
        assert_eq!(FilterValue::from(" 0.25 ").as_number(), Some(0.25));
        assert_eq!(FilterValue::from("").as_number(), Some(0.0));
        assert_eq!(FilterValue::Null.as_number(), Some(0.0));
        assert_eq!(FilterValue::from(true).as_number(), Some(1.0));
        assert_eq!(FilterValue::from("abc").as_number(), None);
        assert_eq!(FilterValue::from(f64::NAN).as_number(), None);
    }

    #[test]
    fn json_values_convert() {
        assert_eq!(FilterValue::from(&json!(null)), FilterValue::Null);
        assert_eq!(FilterValue::from(&json!(42)), FilterValue::Number(42.0));
        assert_eq!(
            FilterValue::from(json!("x")),
            FilterValue::Text("x".to_string())
        );
        assert_eq!(FilterValue::from(&json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<FilterValue> =
            serde_json::from_str(r#"[null, true, 12, "text"]"#).expect("parse");
        assert_eq!(
            values,
            vec![
                FilterValue::Null,
                FilterValue::Bool(true),
                FilterValue::Number(12.0),
                FilterValue::Text("text".to_string()),
            ]
        );
    }
}
