//! Top-level sanitization: trim and HTML-escape string values.

use serde_json::{Map, Value};

/// Build a sanitized copy of a top-level map.
///
/// Every top-level string value is trimmed and HTML-escaped; everything
/// else, nested objects included, is cloned through untouched. The source
/// map is never mutated.
pub fn sanitize(data: &Map<String, Value>) -> Map<String, Value> {
    data.iter()
        .map(|(key, value)| {
            let sanitized = match value {
                Value::String(text) => Value::String(escape_html(text.trim())),
                other => other.clone(),
            };
            (key.clone(), sanitized)
        })
        .collect()
}

/// Escape the five HTML/XML metacharacters for safe embedding in markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn escapes_all_five_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn trims_and_escapes_top_level_strings_only() {
        let Value::Object(data) = json!({
            "bio": "  <b>hi</b>  ",
            "age": 25,
            "flag": true,
            "nested": { "raw": " <i> " }
        }) else {
            unreachable!()
        };

        let clean = sanitize(&data);
        assert_eq!(clean["bio"], json!("&lt;b&gt;hi&lt;/b&gt;"));
        assert_eq!(clean["age"], json!(25));
        assert_eq!(clean["flag"], json!(true));
        // Nested maps are copied through, not walked.
        assert_eq!(clean["nested"], json!({ "raw": " <i> " }));
        // Source is untouched.
        assert_eq!(data["bio"], json!("  <b>hi</b>  "));
    }
}
