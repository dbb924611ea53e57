use crate::error::FilterError;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Keeps the items whose `field` matches `pattern` (case-insensitive,
/// unanchored). Absent input passes through as `None`.
pub fn filter_regex(
    items: Option<&[Value]>,
    field: &str,
    pattern: &str,
) -> Result<Option<Vec<Value>>, FilterError> {
    let Some(items) = items else {
        return Ok(None);
    };

    let regex = compile_pattern(pattern)?;
    let kept = items
        .iter()
        .filter(|item| field_matches(item, field, &regex))
        .cloned()
        .collect();
    Ok(Some(kept))
}

pub fn compile_pattern(pattern: &str) -> Result<Regex, FilterError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

fn field_matches(item: &Value, field: &str, regex: &Regex) -> bool {
    match item.get(field) {
        Some(Value::String(value)) => regex.is_match(value),
        Some(Value::Number(value)) => regex.is_match(&value.to_string()),
        Some(Value::Bool(value)) => regex.is_match(&value.to_string()),
        _ => false,
    }
}
