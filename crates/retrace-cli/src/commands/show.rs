use crate::OutputFormat;
use anyhow::Result;
use retrace_core::body;
use retrace_core::har::{Entry, HarReader, Header};
use retrace_core::session::Session;
use std::path::Path;

pub fn execute(file: &Path, index: usize, format: OutputFormat) -> Result<()> {
    let har = HarReader::from_file(file)?;
    let session = Session::from_har(&har);
    let entry = session.entry(index)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        _ => output_pretty(entry, index),
    }

    Ok(())
}

fn output_pretty(entry: &Entry, index: usize) {
    use console::style;

    println!(
        "\n{}",
        style(format!(
            "Entry {}: {} {}",
            index, entry.request.method, entry.request.url
        ))
        .bold()
        .cyan()
    );

    println!("\n{}", style("General:").bold());
    println!(
        "  Status:       {} {}",
        entry.response.status, entry.response.status_text
    );
    println!("  Time:         {:.0} ms", entry.time);
    if !entry.request.http_version.is_empty() {
        println!("  HTTP Version: {}", entry.request.http_version);
    }
    if let Some(ip) = &entry.server_ip_address {
        println!("  Server IP:    {}", ip);
    }
    if !entry.response.redirect_url.is_empty() {
        println!("  Redirect To:  {}", entry.response.redirect_url);
    }
    println!(
        "  Timing:       send {:.1} ms, wait {:.1} ms, receive {:.1} ms",
        entry.timings.send, entry.timings.wait, entry.timings.receive
    );

    if !entry.request.query_string.is_empty() {
        println!("\n{}", style("Query Parameters:").bold());
        for param in &entry.request.query_string {
            println!("  {}: {}", param.name, param.value);
        }
    }

    if !entry.request.cookies.is_empty() {
        println!("\n{}", style("Cookies:").bold());
        for cookie in &entry.request.cookies {
            println!("  {}={}", cookie.name, cookie.value);
        }
    }

    print_headers("Request Headers:", &entry.request.headers);

    if let Some(post_data) = &entry.request.post_data
        && let Some(text) = &post_data.text
        && !text.is_empty()
    {
        println!("\n{}", style("Request Body:").bold());
        println!("{}", indent(&body::render_text(text, &post_data.mime_type)));
    }

    print_headers("Response Headers:", &entry.response.headers);

    println!("\n{}", style("Response Body:").bold());
    match body::decoded_text(&entry.response.content) {
        Some(text) if !text.is_empty() => {
            println!(
                "{}",
                indent(&body::render_text(&text, &entry.response.content.mime_type))
            );
        }
        _ => {
            let size = entry.response.content.size.max(0);
            println!("  <{} bytes, no displayable text>", size);
        }
    }

    println!();
}

fn print_headers(title: &str, headers: &[Header]) {
    use console::style;

    if headers.is_empty() {
        return;
    }
    println!("\n{}", style(title).bold());
    for header in headers {
        println!("  {}: {}", header.name, header.value);
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
