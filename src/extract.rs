use serde_json::{Map, Value};

/// Pulls a JSON object out of free-form model output.
///
/// Strips a ```json fence if present (then a generic ``` fence), slices
/// between the first `{` and the last `}` of what remains, and parses that.
/// Returns `None` when no brace pair exists, the slice is not valid JSON, or
/// the parsed value is not an object — callers treat `None` as the signal to
/// use their deterministic fallback.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let text = strip_code_fence(text);

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();

    if let Some(after) = text.split_once("```json").map(|(_, rest)| rest) {
        return after.split("```").next().unwrap_or(after).trim();
    }
    if let Some(after) = text.split_once("```").map(|(_, rest)| rest) {
        return after.split("```").next().unwrap_or(after).trim();
    }
    text
}

/// String view of an object field, accepting numbers and booleans as well so
/// model output like `"year": 2026` still fills a template slot.
pub fn field_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_object() {
        let map = extract_json_object(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(map["title"], "Hello");
    }

    #[test]
    fn strips_json_fence() {
        let text = "Here you go:\n```json\n{\"a\": 1}\n```\nLet me know!";
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn strips_generic_fence() {
        let text = "```\n{\"b\": true}\n```";
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["b"], true);
    }

    #[test]
    fn slices_object_out_of_trailing_prose() {
        let text = r#"Sure! {"title": "X", "subtitle": "Y"} Hope that helps."#;
        let map = extract_json_object(text).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn handles_nested_braces() {
        let text = r#"{"outer": {"inner": [1, 2]}, "k": "v"}"#;
        let map = extract_json_object(text).unwrap();
        assert!(map["outer"].is_object());
    }

    #[test]
    fn no_braces_is_none() {
        assert!(extract_json_object("I can't produce JSON for that.").is_none());
        assert!(extract_json_object("").is_none());
    }

    #[test]
    fn malformed_json_is_none() {
        assert!(extract_json_object(r#"{"title": "unterminated"#).is_none());
        assert!(extract_json_object("{not json at all}").is_none());
    }

    #[test]
    fn brace_slice_recovers_object_inside_array() {
        // The slice runs from the first `{` to the last `}`, so an array
        // wrapper is cut away and the inner object survives
        let map = extract_json_object(r#"[{"a": 1}]"#).unwrap();
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn bare_array_is_none() {
        assert!(extract_json_object("[1, 2, 3]").is_none());
    }

    #[test]
    fn fence_without_closing_marker_still_parses() {
        let text = "```json\n{\"open\": \"fence\"}";
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["open"], "fence");
    }

    #[test]
    fn numeric_fields_render_as_strings() {
        let map = extract_json_object(r#"{"year": 2026}"#).unwrap();
        assert_eq!(field_as_string(&map["year"]), "2026");
    }
}
