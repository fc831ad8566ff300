//! Template placeholder engine.
//!
//! A template is a plain string containing zero or more `{identifier}`
//! markers, where `identifier` is one or more word characters. This module
//! provides the two pure operations the rest of the service builds on:
//!
//! - [`extract_placeholders`] - list the identifiers a template references
//! - [`substitute`] - fill markers from a variable map, best-effort
//!
//! Both operations share the same recognition regex, so every identifier
//! extraction reports is substitutable and vice versa. Markers whose
//! identifier is absent from the map are left verbatim, braces included;
//! substitution never fails. Enforcing "all placeholders supplied" is the
//! caller's job (see [`missing_placeholders`]).

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

lazy_static! {
    /// Recognition rule shared by extraction and substitution.
    ///
    /// A marker is an opening brace, one or more word characters, and a
    /// closing brace. Anything else (`{a-b}`, `{}`, a lone `{`) is not a
    /// marker and passes through untouched.
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

/// Extract placeholder identifiers from a template, in order of appearance.
///
/// Duplicates are preserved: `"{a}-{a}-{b}"` yields `["a", "a", "b"]`.
/// Callers needing a set must dedupe themselves. A template with no markers
/// yields an empty vec; there is no error case.
pub fn extract_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Substitute variables into a template, returning a new string.
///
/// Each marker whose identifier is a key of `variables` is replaced by the
/// value's textual form - presence is what counts, not truthiness, so an
/// empty string, `0`, `false`, or JSON `null` all count as supplied.
/// Markers with no matching key are left in place, braces included.
pub fn substitute(template: &str, variables: &Map<String, Value>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => render_value(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Identifiers the template references but the map does not supply.
///
/// Deduplicated, in order of first appearance. Substitution itself never
/// complains about missing keys; this is the hook for callers that want to
/// treat an unfilled placeholder as a validation failure, kept here so both
/// sides use the same recognition rule.
pub fn missing_placeholders(template: &str, variables: &Map<String, Value>) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for name in extract_placeholders(template) {
        if !variables.contains_key(&name) && !missing.contains(&name) {
            missing.push(name);
        }
    }
    missing
}

/// Textual form of a substitution value.
///
/// Strings are inserted verbatim (no JSON quoting), numbers and booleans via
/// their display form, null as the empty string, arrays and objects as
/// compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_extract_basic() {
        let names = extract_placeholders("Translate into {language}: {text}");
        assert_eq!(names, vec!["language", "text"]);
    }

    #[test]
    fn test_extract_no_markers() {
        assert!(extract_placeholders("Just plain text").is_empty());
        assert!(extract_placeholders("").is_empty());
    }

    #[test]
    fn test_extract_preserves_duplicates() {
        assert_eq!(extract_placeholders("{a}-{a}-{b}"), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_extract_rejects_non_word_identifiers() {
        assert!(extract_placeholders("{a-b}").is_empty());
        assert!(extract_placeholders("{}").is_empty());
        assert!(extract_placeholders("{ spaced }").is_empty());
        assert!(extract_placeholders("unmatched {brace").is_empty());
    }

    #[test]
    fn test_extract_underscore_and_digits() {
        assert_eq!(
            extract_placeholders("{user_id} and {v2}"),
            vec!["user_id", "v2"]
        );
    }

    #[test]
    fn test_substitute_basic() {
        let vars = vars(json!({"language": "Spanish", "text": "Hi"}));
        assert_eq!(
            substitute("Translate into {language}: {text}", &vars),
            "Translate into Spanish: Hi"
        );
    }

    #[test]
    fn test_substitute_missing_key_left_verbatim() {
        let vars = Map::new();
        assert_eq!(substitute("Hello {name}", &vars), "Hello {name}");
    }

    #[test]
    fn test_substitute_present_but_falsy_values() {
        let vars = vars(json!({"empty": "", "zero": 0, "flag": false}));
        assert_eq!(
            substitute("[{empty}][{zero}][{flag}]", &vars),
            "[][0][false]"
        );
    }

    #[test]
    fn test_substitute_null_counts_as_supplied() {
        let vars = vars(json!({"gone": null}));
        assert_eq!(substitute("a{gone}b", &vars), "ab");
    }

    #[test]
    fn test_substitute_repeated_marker() {
        let vars = vars(json!({"x": "X"}));
        assert_eq!(substitute("{x}-{x}-{x}", &vars), "X-X-X");
    }

    #[test]
    fn test_substitute_malformed_markers_pass_through() {
        let vars = vars(json!({"a": "A", "b": "B"}));
        assert_eq!(substitute("{a-b} {a} { b }", &vars), "{a-b} A { b }");
    }

    #[test]
    fn test_substitute_number_and_structured_values() {
        let vars = vars(json!({"count": 42, "items": ["x", "y"]}));
        assert_eq!(
            substitute("{count} of {items}", &vars),
            r#"42 of ["x","y"]"#
        );
    }

    #[test]
    fn test_substitute_does_not_rescan_inserted_values() {
        // A value containing a marker-shaped string is inserted literally.
        let vars = vars(json!({"a": "{b}", "b": "nope"}));
        assert_eq!(substitute("{a}", &vars), "{b}");
    }

    #[test]
    fn test_fully_supplied_substitution_leaves_no_markers() {
        let template = "Hello {name}, welcome to {place}!";
        let vars = vars(json!({"name": "Alice", "place": "Rust"}));
        let completed = substitute(template, &vars);
        assert!(extract_placeholders(&completed).is_empty());
    }

    #[test]
    fn test_extraction_count_matches_marker_count() {
        let template = "{a} text {b} more {a} {not-one} {c}";
        assert_eq!(extract_placeholders(template).len(), 4);
    }

    #[test]
    fn test_missing_placeholders_dedupes_in_order() {
        let vars = vars(json!({"b": "supplied"}));
        assert_eq!(
            missing_placeholders("{a} {b} {c} {a}", &vars),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_missing_placeholders_empty_when_fully_supplied() {
        let vars = vars(json!({"a": "", "b": 0}));
        assert!(missing_placeholders("{a}{b}", &vars).is_empty());
    }

    #[test]
    fn test_unicode_template_text() {
        let vars = vars(json!({"name": "世界"}));
        assert_eq!(substitute("こんにちは {name}!", &vars), "こんにちは 世界!");
    }
}
