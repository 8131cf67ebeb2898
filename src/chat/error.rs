//! Transcript parsing errors.

use std::path::PathBuf;

/// Content errors raised while parsing one transcript.
///
/// None of these are recoverable for the file being parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Could not parse file name: {filename} (expected <subject>_<n>.{extension})")]
    FilenameFormat { filename: String, extension: String },

    #[error("Expected segment header on line {line_number}: {line}")]
    SegmentHeader { line_number: usize, line: String },

    #[error("Could not parse segment number on line {line_number}: {line}")]
    SegmentNumber { line_number: usize, line: String },

    #[error("Could not parse speaker line {line_number}: {line}")]
    LineFormat { line_number: usize, line: String },
}

impl ParseError {
    /// Attach a physical line number to an error raised by a line-level parser.
    pub(crate) fn at_line(self, line_number: usize) -> Self {
        match self {
            ParseError::LineFormat { line, .. } => ParseError::LineFormat { line_number, line },
            ParseError::SegmentNumber { line, .. } => {
                ParseError::SegmentNumber { line_number, line }
            }
            other => other,
        }
    }
}

/// Errors from processing one transcript file.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranscriptError {
    /// The content error, if this was not an I/O failure.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            TranscriptError::Parse { source, .. } => Some(source),
            TranscriptError::Read { .. } => None,
        }
    }
}
