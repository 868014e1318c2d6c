use crate::har::Content;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Recover the textual body of a response, if there is one.
///
/// HAR recorders store binary bodies base64-encoded; a body that
/// decodes to non-UTF-8 has no textual form and yields `None`.
pub fn decoded_text(content: &Content) -> Option<String> {
    let text = content.text.as_ref()?;

    match content.encoding.as_deref() {
        Some("base64") => {
            let bytes = match BASE64.decode(text) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!("Failed to decode base64 body: {}", e);
                    return None;
                }
            };
            String::from_utf8(bytes).ok()
        }
        _ => Some(text.clone()),
    }
}

/// Render a body for display.
///
/// Bodies claiming a JSON mime type are pretty-printed; if the text
/// fails to parse despite the claim, the raw text is shown instead.
pub fn render_text(text: &str, mime_type: &str) -> String {
    if !is_json_mime(mime_type) {
        return text.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

fn is_json_mime(mime_type: &str) -> bool {
    match mime_type.parse::<mime::Mime>() {
        Ok(m) => m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: serde_json::Value) -> Content {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_plain_text_passes_through() {
        let c = content(json!({"size": 5, "mimeType": "text/plain", "text": "hello"}));
        assert_eq!(decoded_text(&c), Some("hello".to_string()));
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let c = content(json!({
            "size": 2,
            "mimeType": "application/json",
            "text": "e30=",
            "encoding": "base64"
        }));
        assert_eq!(decoded_text(&c), Some("{}".to_string()));
    }

    #[test]
    fn test_binary_body_has_no_text() {
        // 0xFF 0xFE is not UTF-8
        let c = content(json!({
            "size": 2,
            "mimeType": "image/png",
            "text": "//4=",
            "encoding": "base64"
        }));
        assert_eq!(decoded_text(&c), None);
    }

    #[test]
    fn test_missing_text() {
        let c = content(json!({"size": 340, "mimeType": "application/json"}));
        assert_eq!(decoded_text(&c), None);
    }

    #[test]
    fn test_json_bodies_are_pretty_printed() {
        let rendered = render_text(r#"{"a":1}"#, "application/json");
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_json_suffix_mime_types_count_as_json() {
        let rendered = render_text(r#"{"a":1}"#, "application/problem+json; charset=utf-8");
        assert!(rendered.contains("\n"));
    }

    #[test]
    fn test_malformed_json_falls_back_to_raw_text() {
        let raw = "{not json";
        assert_eq!(render_text(raw, "application/json"), raw);
    }

    #[test]
    fn test_non_json_mime_is_left_alone() {
        let raw = r#"{"a":1}"#;
        assert_eq!(render_text(raw, "text/html"), raw);
    }
}
