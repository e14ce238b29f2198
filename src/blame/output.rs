//! Reporting sinks receiving per-file blame results.

use std::io::Write;

use crate::blame::input::InputFile;
use crate::error::{AppError, Result};
use crate::models::{BlameLine, FileReport};

/// Where a blame run delivers its results, one call per input file.
pub trait BlameOutput {
    fn blame_result(&mut self, file: &InputFile, lines: Vec<BlameLine>) -> Result<()>;

    fn blame_failed(&mut self, file: &InputFile, error: &AppError) -> Result<()>;
}

/// Writes one JSON object per file, newline separated.
pub struct JsonLinesOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Report a failure for a path that never became an `InputFile`.
    pub fn path_failed(&mut self, path: &str, error: &AppError) -> Result<()> {
        self.write(&FileReport::Failed {
            path: path.to_string(),
            error: error.to_string(),
        })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, report: &FileReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)
            .map_err(|e| AppError::Internal(format!("Unable to serialize report: {}", e)))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> BlameOutput for JsonLinesOutput<W> {
    fn blame_result(&mut self, file: &InputFile, lines: Vec<BlameLine>) -> Result<()> {
        self.write(&FileReport::Blamed {
            path: file.relative_path().to_string(),
            lines,
        })
    }

    fn blame_failed(&mut self, file: &InputFile, error: &AppError) -> Result<()> {
        self.path_failed(file.relative_path(), error)
    }
}

/// Keeps everything in memory, in delivery order.
#[derive(Debug, Default)]
pub struct CollectingOutput {
    pub results: Vec<(String, Vec<BlameLine>)>,
    pub failures: Vec<(String, String)>,
}

impl CollectingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines_for(&self, relative_path: &str) -> Option<&[BlameLine]> {
        self.results
            .iter()
            .find(|(path, _)| path == relative_path)
            .map(|(_, lines)| lines.as_slice())
    }
}

impl BlameOutput for CollectingOutput {
    fn blame_result(&mut self, file: &InputFile, lines: Vec<BlameLine>) -> Result<()> {
        self.results.push((file.relative_path().to_string(), lines));
        Ok(())
    }

    fn blame_failed(&mut self, file: &InputFile, error: &AppError) -> Result<()> {
        self.failures
            .push((file.relative_path().to_string(), error.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn json_lines_output_writes_one_record_per_file() {
        let date = Utc.timestamp_millis_opt(1342691097393).unwrap();
        let file = InputFile::new("Dummy.java", "/wc/Dummy.java", 2);
        let missing = InputFile::new("Missing.java", "/wc/Missing.java", 1);

        let mut output = JsonLinesOutput::new(Vec::new());
        output
            .blame_result(&file, vec![BlameLine::new("2", "dgageot", date)])
            .unwrap();
        output
            .blame_failed(&missing, &AppError::NotVersioned("Missing.java".into()))
            .unwrap();

        let written = String::from_utf8(output.into_inner()).unwrap();
        let records: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["path"], "Dummy.java");
        assert_eq!(records[0]["lines"][0]["revision"], "2");
        assert_eq!(records[0]["lines"][0]["author"], "dgageot");
        assert_eq!(records[0]["lines"][0]["date"], "2012-07-19T09:44:57.393Z");
        assert_eq!(records[1]["path"], "Missing.java");
        assert_eq!(
            records[1]["error"],
            "Not under version control: Missing.java"
        );
    }
}
