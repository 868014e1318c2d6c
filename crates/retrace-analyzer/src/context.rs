use retrace_core::har::Entry;
use serde::Serialize;

/// The bounded context forwarded to the generation service.
///
/// Deliberately smaller than the entry it came from: headers, cookies
/// and response bodies stay on this side of the boundary, which keeps
/// the exchange small and avoids leaking capture volume the analysis
/// does not need.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub method: String,
    pub url: String,
    pub payload: String,
    pub response_status: i64,
    pub response_status_text: String,
    pub curl: String,
}

impl RequestContext {
    pub fn from_entry(entry: &Entry, curl_command: &str) -> Self {
        let payload = entry
            .request
            .post_data
            .as_ref()
            .and_then(|p| p.text.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "No Body".to_string());

        Self {
            method: entry.request.method.clone(),
            url: entry.request.url.clone(),
            payload,
            response_status: entry.response.status,
            response_status_text: entry.response.status_text.clone(),
            curl: curl_command.to_string(),
        }
    }
}
