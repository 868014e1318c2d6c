use super::types::Har;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct HarWriter;

impl HarWriter {
    /// Write a HAR structure to a file
    pub fn to_file(har: &Har, path: &Path) -> Result<()> {
        tracing::debug!("Writing HAR file to: {}", path.display());

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, har)?;

        tracing::info!(
            "Successfully wrote HAR file with {} entries to {}",
            har.log.entries.len(),
            path.display()
        );

        Ok(())
    }

    /// Convert a HAR structure to a JSON string
    pub fn to_string(har: &Har) -> Result<String> {
        let json = serde_json::to_string_pretty(har)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::HarReader;

    #[test]
    fn test_round_trip_preserves_unmodeled_fields() {
        let har_json = r#"{
            "log": {
                "version": "1.2",
                "creator": {"name": "browser", "version": "42"},
                "entries": []
            }
        }"#;

        let har = HarReader::from_str(har_json).unwrap();
        let written = HarWriter::to_string(&har).unwrap();
        let reparsed = HarReader::from_str(&written).unwrap();

        assert_eq!(reparsed.log.extra["version"], "1.2");
        assert_eq!(reparsed.log.extra["creator"]["name"], "browser");
    }
}
