//! Whole-run conversion: discover transcripts, parse each one, write the table.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::chat::{Row, TranscriptError, TranscriptParser};
use crate::config::{Config, OnError};
use crate::files;
use crate::output::{open_output, CsvSink};

/// A transcript left out of the table under [`OnError::Skip`].
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: TranscriptError,
}

/// Outcome of parsing a set of transcripts.
#[derive(Debug, Default)]
pub struct Collected {
    pub rows: Vec<Row>,
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Counts reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub rows_written: usize,
}

/// Parse `paths` in order, applying the error policy.
///
/// Under [`OnError::Abort`] the first failure is returned and no rows are kept.
pub fn collect_rows(
    paths: &[PathBuf],
    parser: &TranscriptParser<'_>,
    on_error: OnError,
) -> Result<Collected, TranscriptError> {
    let mut collected = Collected::default();

    for path in paths {
        tracing::info!(path = %path.display(), "Processing");
        match parser.process_file(path) {
            Ok(rows) => {
                tracing::debug!(path = %path.display(), rows = rows.len(), "parsed");
                collected.rows.extend(rows);
                collected.processed += 1;
            }
            Err(error) => match on_error {
                OnError::Abort => return Err(error),
                OnError::Skip => {
                    tracing::warn!(%error, "skipping transcript");
                    collected.skipped.push(SkippedFile {
                        path: path.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok(collected)
}

/// Run a full conversion as described by `config`.
///
/// All transcripts are parsed before the output is opened, so an aborted run
/// leaves no partial table behind.
pub fn run(config: &Config) -> Result<ConvertSummary> {
    let delimiter = config.output.delimiter_byte()?;
    let paths = files::discover(
        &config.input.sources,
        &config.input.extension,
        &config.input.exclude,
    )
    .with_context(|| format!("Failed to list sources: {:?}", config.input.sources))?;

    if paths.is_empty() {
        tracing::warn!(
            sources = %config.input.sources.display(),
            extension = %config.input.extension,
            "no transcripts found"
        );
    }

    let parser = TranscriptParser::new(
        &config.format,
        config.parse.count_mode,
        &config.input.extension,
    );
    let collected = collect_rows(&paths, &parser, config.parse.on_error)?;

    let mut sink = CsvSink::new(open_output(&config.output.path)?, delimiter)?;
    sink.write_rows(&collected.rows)?;
    let rows_written = sink.rows_written();
    let mut out = sink.finish()?;
    out.flush()
        .with_context(|| format!("Failed to write {:?}", config.output.path))?;

    Ok(ConvertSummary {
        files_processed: collected.processed,
        files_skipped: collected.skipped.len(),
        rows_written,
    })
}
