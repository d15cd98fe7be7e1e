use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::template::errors::MissingVariable;
use crate::utils::JsonMap;

lazy_static! {
    static ref PLACEHOLDER_MATCH_RE: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

#[inline]
fn strip_braces(placeholder: &str) -> &str {
    //! Strips the surrounding "{" and "}" from a matched placeholder span.
    //! The span comes from [PLACEHOLDER_MATCH_RE], so both braces are present.
    &placeholder[1..placeholder.len() - 1]
}

/// Scans a template body for `{name}` placeholders and returns the names in
/// order of first appearance, deduplicated. A span runs from a literal `{` to
/// the next literal `}`; empty braces `{}` are not a placeholder.
pub(crate) fn scan_variables(body: &str) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for placeholder in PLACEHOLDER_MATCH_RE.find_iter(body) {
        let name = strip_braces(placeholder.as_str());
        if !variables.iter().any(|known| known == name) {
            variables.push(name.to_string());
        }
    }
    variables
}

/// Renders a JSON value for substitution. Strings render without quotes,
/// every other value via its JSON text.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}

/// Replaces every placeholder in `body` with its value from `values` in a
/// single left-to-right pass. Fails on the first placeholder that has no
/// value, without returning a partially substituted string.
pub(crate) fn substitute(body: &str, values: &JsonMap) -> Result<String, MissingVariable> {
    let mut substituted = String::with_capacity(body.len());
    let mut tail_start = 0;
    for placeholder in PLACEHOLDER_MATCH_RE.find_iter(body) {
        let name = strip_braces(placeholder.as_str());
        match values.get(name) {
            Some(value) => {
                substituted.push_str(&body[tail_start..placeholder.start()]);
                substituted.push_str(&stringify(value));
                tail_start = placeholder.end();
            }
            None => return Err(MissingVariable::new(name, scan_variables(body))),
        }
    }
    substituted.push_str(&body[tail_start..]);
    Ok(substituted)
}

#[cfg(test)]
mod substitution_tests {
    use serde_json::json;

    use super::{scan_variables, stringify, substitute};
    use crate::utils::JsonMap;

    fn values(entries: &[(&str, serde_json::Value)]) -> JsonMap {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_scan_variables() {
        assert_eq!(vec!["a".to_string()], scan_variables("{a}"));
        assert_eq!(
            vec!["a".to_string(), "b".to_string()],
            scan_variables("{a}    {b}")
        );
        assert!(scan_variables("no placeholders here").is_empty());
        assert!(scan_variables("dangling {brace").is_empty());
    }

    #[test]
    fn test_scan_deduplicates_in_order() {
        assert_eq!(
            vec!["b".to_string(), "a".to_string()],
            scan_variables("{b} then {a} then {b} again")
        );
    }

    #[test]
    fn test_empty_braces_are_not_a_placeholder() {
        assert!(scan_variables("{}").is_empty());
        let result = substitute("literal {} braces", &JsonMap::new()).unwrap();
        assert_eq!("literal {} braces", result);
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let mapping = values(&[("a", json!("alice")), ("b", json!("bob"))]);
        let result = substitute("{a} and {b} and {a}", &mapping).unwrap();
        assert_eq!("alice and bob and alice", result);
    }

    #[test]
    fn test_substitute_missing_variable() {
        let mapping = values(&[("a", json!("alice"))]);
        let error = substitute("{a} and {b}", &mapping).unwrap_err();
        assert_eq!("b", error.variable);
        assert!(error.to_string().contains("b"));
    }

    #[test]
    fn test_stringify_json_forms() {
        assert_eq!("plain", stringify(&json!("plain")));
        assert_eq!("30", stringify(&json!(30)));
        assert_eq!("true", stringify(&json!(true)));
        assert_eq!("null", stringify(&json!(null)));
        assert_eq!(r#"["a","b"]"#, stringify(&json!(["a", "b"])));
    }
}
