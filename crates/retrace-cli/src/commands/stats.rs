use crate::OutputFormat;
use anyhow::Result;
use chrono::DateTime;
use retrace_core::har::HarReader;
use retrace_core::metrics::{SessionMetrics, format_bytes};
use retrace_core::session::{GroupQuery, Session, group_by_host};
use serde::Serialize;
use std::path::Path;

/// Everything the stats command reports about one capture.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub captured_entries: usize,
    pub metrics: SessionMetrics,
    pub capture_start: Option<String>,
    pub capture_end: Option<String>,
    pub hosts: Vec<HostCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostCount {
    pub host: String,
    pub requests: usize,
}

/// Load a capture and derive its session report.
pub fn build_report(file: &Path) -> Result<SessionReport> {
    tracing::debug!("Reading HAR file: {}", file.display());

    let har = HarReader::from_file(file)?;
    let captured_entries = har.log.entries.len();

    let session = Session::from_har(&har);
    let metrics = SessionMetrics::from_entries(session.entries());

    let capture_start = session
        .entries()
        .first()
        .map(|e| e.started_date_time.clone());
    let capture_end = session.entries().last().map(|e| e.started_date_time.clone());

    let hosts = group_by_host(session.entries(), &GroupQuery::new())
        .into_iter()
        .map(|g| HostCount {
            requests: g.indices.len(),
            host: g.host,
        })
        .collect();

    Ok(SessionReport {
        captured_entries,
        metrics,
        capture_start,
        capture_end,
        hosts,
    })
}

pub fn execute(file: &Path, hosts: bool, format: OutputFormat) -> Result<()> {
    tracing::info!("Computing session statistics for: {}", file.display());

    let report = build_report(file)?;

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Table => output_table(&report, hosts),
        OutputFormat::Pretty => output_pretty(&report, hosts),
    }

    Ok(())
}

fn output_pretty(report: &SessionReport, include_hosts: bool) {
    use console::style;

    println!("\n{}", style("Session Overview").bold().cyan());
    println!("{}", style("================").cyan());

    println!("\n{}", style("Summary:").bold());
    println!("  Captured Entries: {}", report.captured_entries);
    println!("  Total Requests:   {}", report.metrics.total_requests);
    println!(
        "  Data Transferred: {}",
        format_bytes(report.metrics.total_bytes)
    );
    println!("  Avg Latency:      {:.0} ms", report.metrics.avg_time_ms);

    if let (Some(start), Some(end)) = (&report.capture_start, &report.capture_end) {
        println!("  Capture Window:   {} to {}", start, end);
        if let (Ok(s), Ok(e)) = (
            DateTime::parse_from_rfc3339(start),
            DateTime::parse_from_rfc3339(end),
        ) {
            let span = (e - s).num_milliseconds() as f64 / 1000.0;
            println!("  Session Length:   {:.1} s", span);
        }
    }

    if !report.metrics.status_classes.is_empty() {
        println!("\n{}", style("Status Distribution:").bold());
        for bucket in &report.metrics.status_classes {
            println!("  {:<6} {}", bucket.class, bucket.count);
        }
    }

    if include_hosts && !report.hosts.is_empty() {
        println!("\n{}", style("Hosts:").bold());
        for host in &report.hosts {
            println!("  {:>4} req  {}", host.requests, host.host);
        }
    }

    println!();
}

fn output_json(report: &SessionReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

fn output_table(report: &SessionReport, include_hosts: bool) {
    println!("Metric,Value");
    println!("Captured Entries,{}", report.captured_entries);
    println!("Total Requests,{}", report.metrics.total_requests);
    println!("Total Bytes,{}", report.metrics.total_bytes);
    println!("Avg Latency (ms),{:.2}", report.metrics.avg_time_ms);
    for bucket in &report.metrics.status_classes {
        println!("Status {},{}", bucket.class, bucket.count);
    }
    if include_hosts {
        for host in &report.hosts {
            println!("Host {},{}", host.host, host.requests);
        }
    }
}
