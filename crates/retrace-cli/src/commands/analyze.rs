use crate::OutputFormat;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use retrace_analyzer::{AnalysisResult, GeminiClient, RequestAnalyzer, TargetLanguage};
use retrace_core::curl::curl_command;
use retrace_core::har::HarReader;
use retrace_core::session::Session;
use std::path::Path;
use std::time::Duration;

pub async fn execute(
    file: &Path,
    index: usize,
    api_key: &str,
    model: &str,
    timeout_secs: u64,
    language: Option<TargetLanguage>,
    format: OutputFormat,
) -> Result<()> {
    let har = HarReader::from_file(file)?;
    let session = Session::from_har(&har);
    let entry = session.entry(index)?;
    let curl = curl_command(&entry.request);

    let client = GeminiClient::new(api_key, model, Duration::from_secs(timeout_secs))?;
    let analyzer = RequestAnalyzer::new(client);

    tracing::info!(
        "Analyzing entry {} ({} {})",
        index,
        entry.request.method,
        entry.request.url
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Analyzing request...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = analyzer.analyze(entry, &curl).await;

    spinner.finish_and_clear();

    if let Some(language) = language {
        println!("{}", result.code_for(language));
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => output_pretty(&result),
    }

    Ok(())
}

fn output_pretty(result: &AnalysisResult) {
    use console::style;

    println!("\n{}", style("Summary").bold().cyan());
    println!("{}", result.summary);

    if !result.error_analysis.is_empty() {
        println!("\n{}", style("Error Analysis").bold().yellow());
        println!("{}", result.error_analysis);
    }

    for language in TargetLanguage::ALL {
        println!(
            "\n{}",
            style(format!("Reproduction: {}", language.display_name())).bold()
        );
        println!("{}", result.code_for(language));
    }

    println!();
}
