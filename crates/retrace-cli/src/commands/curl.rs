use anyhow::Result;
use retrace_core::curl::curl_command;
use retrace_core::har::HarReader;
use retrace_core::session::Session;
use std::path::Path;

/// Load a capture and synthesize the curl command for one session entry.
pub fn synthesize(file: &Path, index: usize) -> Result<String> {
    let har = HarReader::from_file(file)?;
    let session = Session::from_har(&har);
    let entry = session.entry(index)?;

    Ok(curl_command(&entry.request))
}

pub fn execute(file: &Path, index: usize) -> Result<()> {
    println!("{}", synthesize(file, index)?);
    Ok(())
}
