use crate::har::Entry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session-level statistics, each a pure function of the filtered
/// entry sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub total_requests: usize,
    pub total_bytes: u64,
    pub avg_time_ms: f64,
    pub status_classes: Vec<StatusClassCount>,
}

/// One bucket of the status-class histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusClassCount {
    pub class: String,
    pub count: usize,
}

/// Bucket a status code by its hundreds digit.
pub fn status_class(status: i64) -> &'static str {
    match status / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}

impl SessionMetrics {
    pub fn from_entries(entries: &[Entry]) -> Self {
        tracing::debug!("Aggregating metrics over {} entries", entries.len());

        let total_requests = entries.len();

        // Unknown content sizes count as zero bytes
        let total_bytes: u64 = entries
            .iter()
            .map(|e| e.response.content.size.max(0) as u64)
            .sum();

        let avg_time_ms = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.time).sum::<f64>() / total_requests as f64
        };

        // BTreeMap keeps bucket labels in lexicographic order for
        // stable display ("1xx".."5xx", then "other").
        let mut histogram: BTreeMap<&'static str, usize> = BTreeMap::new();
        for entry in entries {
            *histogram.entry(status_class(entry.response.status)).or_insert(0) += 1;
        }

        let status_classes = histogram
            .into_iter()
            .map(|(class, count)| StatusClassCount {
                class: class.to_string(),
                count,
            })
            .collect();

        Self {
            total_requests,
            total_bytes,
            avg_time_ms,
            status_classes,
        }
    }
}

/// Render a byte count for humans (1024 base, two decimals).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut exponent = 0;
    while value >= 1024.0 && exponent < UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }

    // Trim trailing zeros the way "%.2f" + parseFloat would
    let rendered = format!("{:.2}", value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(status: i64, time: f64, size: i64) -> Entry {
        serde_json::from_value(json!({
            "time": time,
            "request": {"method": "GET", "url": "https://api.example.com/users"},
            "response": {"status": status, "content": {"size": size}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_session() {
        let metrics = SessionMetrics::from_entries(&[]);
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.total_bytes, 0);
        assert_eq!(metrics.avg_time_ms, 0.0);
        assert!(metrics.status_classes.is_empty());
    }

    #[test]
    fn test_single_entry_session() {
        let metrics = SessionMetrics::from_entries(&[entry(200, 120.0, 340)]);
        assert_eq!(metrics.total_requests, 1);
        assert_eq!(metrics.total_bytes, 340);
        assert_eq!(metrics.avg_time_ms, 120.0);
        assert_eq!(metrics.status_classes.len(), 1);
        assert_eq!(metrics.status_classes[0].class, "2xx");
        assert_eq!(metrics.status_classes[0].count, 1);
    }

    #[test]
    fn test_negative_content_size_counts_as_zero() {
        let metrics = SessionMetrics::from_entries(&[entry(200, 1.0, -1), entry(200, 1.0, 100)]);
        assert_eq!(metrics.total_bytes, 100);
    }

    #[test]
    fn test_histogram_partitions_all_entries() {
        let entries = vec![
            entry(200, 10.0, 0),
            entry(204, 10.0, 0),
            entry(301, 10.0, 0),
            entry(404, 10.0, 0),
            entry(503, 10.0, 0),
            entry(999, 10.0, 0),
        ];
        let metrics = SessionMetrics::from_entries(&entries);

        let total: usize = metrics.status_classes.iter().map(|c| c.count).sum();
        assert_eq!(total, entries.len());

        let labels: Vec<&str> = metrics
            .status_classes
            .iter()
            .map(|c| c.class.as_str())
            .collect();
        assert_eq!(labels, vec!["2xx", "3xx", "4xx", "5xx", "other"]);
    }

    #[test]
    fn test_status_class_buckets() {
        assert_eq!(status_class(100), "1xx");
        assert_eq!(status_class(226), "2xx");
        assert_eq!(status_class(399), "3xx");
        assert_eq!(status_class(401), "4xx");
        assert_eq!(status_class(599), "5xx");
        assert_eq!(status_class(0), "other");
        assert_eq!(status_class(700), "other");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1 MB");
    }
}
