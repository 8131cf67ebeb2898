//! CSV serialization of parsed rows.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::chat::Row;

/// Column names, in output order.
pub const COLUMNS: [&str; 6] = [
    "subject_id",
    "segment_id",
    "speaker",
    "sentence",
    "row_number",
    "switch_count",
];

/// Writes rows as CSV with a header line.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(inner: W, delimiter: u8) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(inner);
        writer
            .write_record(COLUMNS)
            .context("Failed to write CSV header")?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Append rows in order.
    pub fn write_rows(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            self.writer
                .serialize(row)
                .context("Failed to write CSV row")?;
        }
        self.rows_written += rows.len();
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the wrapped writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}

/// Open the output destination: `-` is stdout, anything else a file whose
/// parent directories are created on demand.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout().lock()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    Ok(Box::new(io::BufWriter::new(file)))
}

/// Render rows to a CSV string.
pub fn to_csv_string(rows: &[Row], delimiter: u8) -> Result<String> {
    let mut sink = CsvSink::new(Vec::new(), delimiter)?;
    sink.write_rows(rows)?;
    let bytes = sink.finish()?;
    Ok(String::from_utf8(bytes)?)
}
