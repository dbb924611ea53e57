use serde_json::Value;

const NEGATION_PREFIX: char = '!';

/// A single search term. `!term` inverts the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
    negated: bool,
}

impl SearchTerm {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(NEGATION_PREFIX) {
            Some(rest) if !rest.is_empty() => Self {
                needle: rest.to_lowercase(),
                negated: true,
            },
            _ => Self {
                needle: raw.to_lowercase(),
                negated: false,
            },
        }
    }

    pub fn matches(&self, item: &Value) -> bool {
        contains_term(item, &self.needle) != self.negated
    }
}

/// Narrows `items` by every whitespace-separated term in `query`.
///
/// Each term must appear, case-insensitively, in some value nested anywhere
/// inside the item. An absent or blank query keeps everything.
pub fn filter_multiple(items: &[Value], query: Option<&str>) -> Vec<Value> {
    let mut result = items.to_vec();
    let Some(query) = query else {
        return result;
    };

    for term in query.split_whitespace().map(SearchTerm::parse) {
        result.retain(|item| term.matches(item));
    }
    result
}

fn contains_term(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => value.to_string().contains(needle),
        Value::Number(value) => value.to_string().contains(needle),
        Value::String(value) => value.to_lowercase().contains(needle),
        Value::Array(values) => values.iter().any(|value| contains_term(value, needle)),
        // `$`-prefixed keys are renderer bookkeeping.
        Value::Object(map) => map
            .iter()
            .filter(|(key, _)| !key.starts_with('$'))
            .any(|(_, value)| contains_term(value, needle)),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_multiple, SearchTerm};
    use serde_json::{json, Value};

    fn people() -> Vec<Value> {
        vec![
            json!({ "name": "Ada Lovelace", "city": "London" }),
            json!({ "name": "Grace Hopper", "city": "New York" }),
            json!({ "name": "Alan Turing", "city": "London", "tags": ["math", "crypto"] }),
        ]
    }

    fn names(items: &[Value]) -> Vec<&str> {
        items
            .iter()
            .map(|item| item["name"].as_str().expect("name"))
            .collect()
    }

    #[test]
    fn absent_or_blank_query_keeps_all() {
        assert_eq!(filter_multiple(&people(), None).len(), 3);
        assert_eq!(filter_multiple(&people(), Some("   ")).len(), 3);
    }

    #[test]
    fn terms_narrow_successively() {
        let result = filter_multiple(&people(), Some("london alan"));
        assert_eq!(names(&result), vec!["Alan Turing"]);
    }

    #[test]
    fn match_is_case_insensitive_and_deep() {
        let result = filter_multiple(&people(), Some("CRYPTO"));
        assert_eq!(names(&result), vec!["Alan Turing"]);
    }

    #[test]
    fn negated_term_excludes_matches() {
        let result = filter_multiple(&people(), Some("!london"));
        assert_eq!(names(&result), vec!["Grace Hopper"]);
    }

    #[test]
    fn dollar_keys_are_ignored() {
        let items = vec![json!({ "$$hashKey": "object:1", "name": "x" })];
        assert!(filter_multiple(&items, Some("object")).is_empty());
    }

    #[test]
    fn primitives_match_on_string_form() {
        let items = vec![json!(1234), json!("abc"), json!(null), json!(true)];
        assert_eq!(filter_multiple(&items, Some("23")), vec![json!(1234)]);
        assert_eq!(filter_multiple(&items, Some("tru")), vec![json!(true)]);
    }

    #[test]
    fn bare_bang_is_a_literal_term() {
        let term = SearchTerm::parse("!");
        assert!(term.matches(&json!("wow!")));
        assert!(!term.matches(&json!("wow")));
    }
}
