use crate::error::FilterError;
use crate::filter::{filter_multiple, filter_regex};
use crate::format::{
    format_phone, percentage, seconds_to_epoch_millis, trust_as_html, trust_as_resource_url,
    truncate,
};
use crate::value::FilterValue;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterName {
    Percentage,
    Tel,
    Truncate,
    Unsafe,
    Multiple,
    SecondConversion,
    TrustedResourceUrl,
    Regex,
}

impl FilterName {
    pub const ALL: [FilterName; 8] = [
        FilterName::Percentage,
        FilterName::Tel,
        FilterName::Truncate,
        FilterName::Unsafe,
        FilterName::Multiple,
        FilterName::SecondConversion,
        FilterName::TrustedResourceUrl,
        FilterName::Regex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::Percentage => "percentage",
            FilterName::Tel => "tel",
            FilterName::Truncate => "truncate",
            FilterName::Unsafe => "unsafe",
            FilterName::Multiple => "multiple",
            FilterName::SecondConversion => "secondConversion",
            FilterName::TrustedResourceUrl => "trustedResourceUrl",
            FilterName::Regex => "regex",
        }
    }

    pub fn max_args(self) -> usize {
        match self {
            FilterName::Tel
            | FilterName::Unsafe
            | FilterName::SecondConversion
            | FilterName::TrustedResourceUrl => 0,
            FilterName::Percentage | FilterName::Multiple => 1,
            FilterName::Truncate | FilterName::Regex => 2,
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "percentage" => Ok(FilterName::Percentage),
            "tel" => Ok(FilterName::Tel),
            "truncate" => Ok(FilterName::Truncate),
            "unsafe" => Ok(FilterName::Unsafe),
            "multiple" => Ok(FilterName::Multiple),
            "secondConversion" | "second_conversion" => Ok(FilterName::SecondConversion),
            "trustedResourceUrl" | "trusted_resource_url" => Ok(FilterName::TrustedResourceUrl),
            "regex" => Ok(FilterName::Regex),
            _ => Err(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStage {
    Percentage {
        decimals: Option<usize>,
    },
    Tel,
    Truncate {
        length: Option<usize>,
        end: Option<String>,
    },
    Unsafe,
    Multiple {
        query: Option<String>,
    },
    SecondConversion,
    TrustedResourceUrl,
    Regex {
        field: String,
        pattern: String,
    },
}

impl FilterStage {
    pub fn name(&self) -> FilterName {
        match self {
            FilterStage::Percentage { .. } => FilterName::Percentage,
            FilterStage::Tel => FilterName::Tel,
            FilterStage::Truncate { .. } => FilterName::Truncate,
            FilterStage::Unsafe => FilterName::Unsafe,
            FilterStage::Multiple { .. } => FilterName::Multiple,
            FilterStage::SecondConversion => FilterName::SecondConversion,
            FilterStage::TrustedResourceUrl => FilterName::TrustedResourceUrl,
            FilterStage::Regex { .. } => FilterName::Regex,
        }
    }

    pub fn apply(&self, value: Value) -> Result<Value, FilterError> {
        match self {
            FilterStage::Percentage { decimals } => {
                Ok(Value::String(percentage(&value, *decimals)))
            }
            FilterStage::Tel => Ok(Value::String(format_phone(&value))),
            FilterStage::Truncate { length, end } => {
                let text = FilterValue::from(&value).to_string();
                Ok(Value::String(truncate(&text, *length, end.as_deref())))
            }
            FilterStage::Unsafe => Ok(Value::String(
                trust_as_html(FilterValue::from(value).to_string()).into_inner(),
            )),
            FilterStage::TrustedResourceUrl => Ok(Value::String(
                trust_as_resource_url(FilterValue::from(value).to_string()).into_inner(),
            )),
            FilterStage::Multiple { query } => match value {
                Value::Null => Ok(Value::Null),
                Value::Array(items) => Ok(Value::Array(filter_multiple(&items, query.as_deref()))),
                _ => Err(FilterError::ExpectedList {
                    filter: FilterName::Multiple.as_str(),
                }),
            },
            FilterStage::Regex { field, pattern } => match value {
                Value::Null => Ok(Value::Null),
                Value::Array(items) => {
                    let kept = filter_regex(Some(items.as_slice()), field, pattern)?;
                    Ok(kept.map_or(Value::Null, Value::Array))
                }
                _ => Err(FilterError::ExpectedList {
                    filter: FilterName::Regex.as_str(),
                }),
            },
            FilterStage::SecondConversion => {
                let millis = FilterValue::from(&value)
                    .as_number()
                    .filter(|seconds| seconds.is_finite())
                    .and_then(|seconds| seconds_to_epoch_millis(seconds.trunc() as i64));
                Ok(millis.map_or(Value::Null, Value::from))
            }
        }
    }
}

/// Filters applied left to right, each stage consuming the previous output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    pub stages: Vec<FilterStage>,
}

impl FilterChain {
    pub fn apply(&self, value: Value) -> Result<Value, FilterError> {
        self.stages
            .iter()
            .try_fold(value, |value, stage| stage.apply(value))
    }
}
