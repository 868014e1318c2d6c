use crate::har::Request;

// curl sets these itself; replaying captured values breaks the request.
const SUPPRESSED_HEADERS: [&str; 2] = ["content-length", "host"];

/// Synthesize a curl invocation equivalent to the captured request.
///
/// The URL is emitted verbatim (no re-encoding), headers keep their
/// capture order, and the output is deterministic for identical input.
pub fn curl_command(request: &Request) -> String {
    let mut curl = format!("curl -X {} \"{}\"", request.method, request.url);

    for header in &request.headers {
        if SUPPRESSED_HEADERS.contains(&header.name.to_lowercase().as_str()) {
            continue;
        }
        curl.push_str(&format!(
            " \\\n  -H \"{}: {}\"",
            header.name,
            header.value.replace('"', "\\\"")
        ));
    }

    if let Some(post_data) = &request.post_data
        && let Some(text) = &post_data.text
        && !text.is_empty()
    {
        // Close the single-quoted string, emit an escaped quote, reopen:
        // the payload round-trips through a shell unmodified.
        curl.push_str(&format!(" \\\n  -d '{}'", text.replace('\'', "'\\''")));
    }

    curl
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> Request {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_method_and_url_verbatim() {
        let req = request(json!({
            "method": "GET",
            "url": "https://api.example.com/users?page=2&sort=name%20asc"
        }));

        assert_eq!(
            curl_command(&req),
            "curl -X GET \"https://api.example.com/users?page=2&sort=name%20asc\""
        );
    }

    #[test]
    fn test_suppresses_host_and_content_length() {
        let req = request(json!({
            "method": "POST",
            "url": "https://api.example.com/users",
            "headers": [
                {"name": "Host", "value": "api.example.com"},
                {"name": "Content-Length", "value": "5"},
                {"name": "X-Foo", "value": "bar"}
            ]
        }));

        let curl = curl_command(&req);
        assert!(curl.contains("X-Foo: bar"));
        assert!(!curl.contains("Host"));
        assert!(!curl.contains("Content-Length"));
    }

    #[test]
    fn test_suppression_is_case_insensitive() {
        let req = request(json!({
            "method": "GET",
            "url": "https://api.example.com/users",
            "headers": [
                {"name": "HOST", "value": "api.example.com"},
                {"name": "content-length", "value": "0"}
            ]
        }));

        let curl = curl_command(&req);
        assert!(!curl.to_lowercase().contains("host:"));
        assert!(!curl.to_lowercase().contains("content-length"));
    }

    #[test]
    fn test_escapes_double_quotes_in_header_values() {
        let req = request(json!({
            "method": "GET",
            "url": "https://api.example.com/users",
            "headers": [
                {"name": "If-None-Match", "value": "\"abc123\""}
            ]
        }));

        let curl = curl_command(&req);
        assert!(curl.contains(r#"-H "If-None-Match: \"abc123\"""#));
    }

    #[test]
    fn test_headers_keep_capture_order() {
        let req = request(json!({
            "method": "GET",
            "url": "https://api.example.com/users",
            "headers": [
                {"name": "X-First", "value": "1"},
                {"name": "X-Second", "value": "2"}
            ]
        }));

        let curl = curl_command(&req);
        let first = curl.find("X-First").unwrap();
        let second = curl.find("X-Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_body_single_quotes_round_trip() {
        let payload = r#"{"name":"O'Brien"}"#;
        let req = request(json!({
            "method": "POST",
            "url": "https://api.example.com/users",
            "postData": {"mimeType": "application/json", "text": payload}
        }));

        let curl = curl_command(&req);
        assert!(curl.contains(r#"-d '{"name":"O'\''Brien"}'"#));

        // Un-escaping the shell quoting recovers the payload exactly
        let start = curl.find("-d '").unwrap() + 4;
        let emitted = &curl[start..curl.len() - 1];
        assert_eq!(emitted.replace("'\\''", "'"), payload);
    }

    #[test]
    fn test_empty_body_is_omitted() {
        let req = request(json!({
            "method": "POST",
            "url": "https://api.example.com/users",
            "postData": {"mimeType": "application/json", "text": ""}
        }));

        assert!(!curl_command(&req).contains("-d"));
    }

    #[test]
    fn test_quoted_headers_round_trip() {
        let req = request(json!({
            "method": "GET",
            "url": "https://api.example.com/users",
            "headers": [
                {"name": "Accept", "value": "application/json"},
                {"name": "If-None-Match", "value": "\"etag-1\""},
                {"name": "X-Trace", "value": "a=1; b=2"}
            ]
        }));

        // Re-parsing the quoted header arguments recovers the original
        // name/value pairs exactly.
        let curl = curl_command(&req);
        let recovered: Vec<(String, String)> = curl
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let line = line
                    .strip_suffix('\\')
                    .map(|l| l.trim_end())
                    .unwrap_or(line);
                let line = line.strip_prefix("-H \"")?;
                let line = line.strip_suffix('"')?;
                let (name, value) = line.split_once(": ")?;
                Some((name.to_string(), value.replace("\\\"", "\"")))
            })
            .collect();

        assert_eq!(
            recovered,
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("If-None-Match".to_string(), "\"etag-1\"".to_string()),
                ("X-Trace".to_string(), "a=1; b=2".to_string()),
            ]
        );
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let req = request(json!({
            "method": "POST",
            "url": "https://api.example.com/users",
            "headers": [{"name": "Accept", "value": "application/json"}],
            "postData": {"mimeType": "application/json", "text": "{}"}
        }));

        assert_eq!(curl_command(&req), curl_command(&req));
    }
}
