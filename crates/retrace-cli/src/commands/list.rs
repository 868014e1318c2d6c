use crate::OutputFormat;
use anyhow::Result;
use retrace_core::har::HarReader;
use retrace_core::session::{GroupQuery, Session, group_by_host};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct GroupListing {
    pub host: String,
    pub entries: Vec<EntryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryRow {
    /// Position in the session's filtered sequence; feed this to
    /// `show`, `curl` and `analyze`.
    pub index: usize,
    pub method: String,
    pub status: i64,
    pub time_ms: f64,
    pub url: String,
}

/// Load a capture, group its session entries by host, and flatten the
/// groups into display rows.
pub fn build_listing(
    file: &Path,
    url_contains: Option<String>,
    method: Option<String>,
) -> Result<Vec<GroupListing>> {
    let har = HarReader::from_file(file)?;
    let session = Session::from_har(&har);

    let mut query = GroupQuery::new();
    if let Some(needle) = url_contains {
        query = query.with_url_contains(needle);
    }
    if let Some(method) = method {
        query = query.with_method(method);
    }

    let listing = group_by_host(session.entries(), &query)
        .into_iter()
        .map(|group| GroupListing {
            entries: group
                .indices
                .iter()
                .map(|&index| {
                    let entry = &session.entries()[index];
                    EntryRow {
                        index,
                        method: entry.request.method.clone(),
                        status: entry.response.status,
                        time_ms: entry.time,
                        url: entry.request.url.clone(),
                    }
                })
                .collect(),
            host: group.host,
        })
        .collect();

    Ok(listing)
}

pub fn execute(
    file: &Path,
    url_contains: Option<String>,
    method: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let listing = build_listing(file, url_contains, method)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Table => output_table(&listing),
        OutputFormat::Pretty => output_pretty(&listing),
    }

    Ok(())
}

fn output_pretty(listing: &[GroupListing]) {
    use console::style;

    if listing.is_empty() {
        println!("No matching requests found.");
        return;
    }

    for group in listing {
        println!(
            "\n{} {}",
            style(&group.host).bold().cyan(),
            style(format!("({})", group.entries.len())).dim()
        );
        for row in &group.entries {
            println!(
                "  [{:>3}] {:<7} {:>4}  {:>7.0} ms  {}",
                row.index,
                row.method,
                row.status,
                row.time_ms,
                entry_label(&row.url)
            );
        }
    }

    println!();
}

fn output_table(listing: &[GroupListing]) {
    println!("Host,Index,Method,Status,Time (ms),URL");
    for group in listing {
        for row in &group.entries {
            println!(
                "{},{},{},{},{:.2},{}",
                group.host, row.index, row.method, row.status, row.time_ms, row.url
            );
        }
    }
}

/// Short display label for a URL: its last path segment, query
/// stripped, or "/" when there is none.
fn entry_label(url: &str) -> &str {
    let trimmed = url.split('?').next().unwrap_or(url);
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => "/",
    }
}
