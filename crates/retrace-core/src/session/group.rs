use crate::har::Entry;
use url::Url;

/// Bucket for entries whose URL has no parseable hostname.
pub const UNKNOWN_HOST: &str = "unknown host";

/// Optional narrowing predicates applied before grouping.
///
/// Both conditions must hold for an entry to be kept (AND logic), and
/// grouping is re-derived from the full session on every call.
#[derive(Debug, Clone, Default)]
pub struct GroupQuery {
    /// Case-insensitive substring match against the request URL
    pub url_contains: Option<String>,
    /// Exact method match
    pub method: Option<String>,
}

impl GroupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url_contains(mut self, needle: String) -> Self {
        self.url_contains = Some(needle);
        self
    }

    pub fn with_method(mut self, method: String) -> Self {
        self.method = Some(method);
        self
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(needle) = &self.url_contains
            && !entry
                .request
                .url
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }
        if let Some(method) = &self.method
            && entry.request.method != *method
        {
            return false;
        }
        true
    }
}

/// Entries sharing an origin host.
///
/// `indices` are positions in the session's filtered sequence, in
/// session order. Selection state always refers to that sequence, so a
/// group row can be mapped back to the entry it came from regardless of
/// how the groups themselves are sorted.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HostGroup {
    pub host: String,
    pub indices: Vec<usize>,
}

impl HostGroup {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Partition session entries by origin host.
///
/// Groups come back ordered by descending member count; ties keep
/// first-seen order (the sort is stable over insertion order). Within a
/// group, entries retain session order.
pub fn group_by_host(entries: &[Entry], query: &GroupQuery) -> Vec<HostGroup> {
    let mut groups: Vec<HostGroup> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !query.matches(entry) {
            continue;
        }

        let host = match Url::parse(&entry.request.url) {
            Ok(url) => url
                .host_str()
                .map(|h| h.to_string())
                .unwrap_or_else(|| UNKNOWN_HOST.to_string()),
            Err(e) => {
                tracing::debug!("Failed to parse URL {}: {}", entry.request.url, e);
                UNKNOWN_HOST.to_string()
            }
        };

        match groups.iter_mut().find(|g| g.host == host) {
            Some(group) => group.indices.push(index),
            None => groups.push(HostGroup {
                host,
                indices: vec![index],
            }),
        }
    }

    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}
