use anyhow::Result;
use retrace_core::har::{Har, HarReader, HarWriter, Log};
use retrace_core::session::{GroupQuery, Session};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn execute(
    file: &Path,
    url_contains: Option<String>,
    method: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    tracing::debug!("Exporting session from: {}", file.display());

    let har = HarReader::from_file(file)?;
    let session = Session::from_har(&har);

    let mut query = GroupQuery::new();
    if let Some(needle) = url_contains {
        query = query.with_url_contains(needle);
    }
    if let Some(method) = method {
        query = query.with_method(method);
    }

    let entries: Vec<_> = session
        .into_entries()
        .into_iter()
        .filter(|e| query.matches(e))
        .collect();

    tracing::info!("Exporting {} session entries", entries.len());

    // Log metadata the session analysis never touched rides along
    let exported = Har {
        log: Log {
            entries,
            extra: har.log.extra.clone(),
        },
    };

    if let Some(output_path) = output {
        HarWriter::to_file(&exported, &output_path)?;
    } else {
        let json = HarWriter::to_string(&exported)?;
        io::stdout().write_all(json.as_bytes())?;
        io::stdout().write_all(b"\n")?;
    }

    Ok(())
}
