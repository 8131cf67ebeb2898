//! Segment parser.
//!
//! Walks a [`LookaheadReader`] positioned after the metadata headers and turns
//! switch-bearing speaker lines into output rows.
//!
//! ```text
//!            @T: n                       next line is @T:
//! Awaiting ─────────▶ InSegment(n) ─────────────────────▶ Awaiting
//!    │                    │  @End
//!    │ other line         └────────────────────────────▶ Awaiting
//!    ▼
//!  error
//! ```

use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

use super::classify::{is_end, is_segment_header, segment_number};
use super::error::ParseError;
use super::format::ChatFormat;
use super::line::{has_switch_marker, parse_line, switch_marker_count};
use super::reader::LookaheadReader;

/// How many rows a line with several switch markers produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    /// One row per switch marker, each copy carrying the line's total count.
    #[default]
    Duplicate,
    /// A single row per line carrying the total count.
    Aggregate,
}

impl CountMode {
    /// Number of rows to emit for a line with `switches` markers.
    pub fn rows_for(self, switches: usize) -> usize {
        match (self, switches) {
            (_, 0) => 0,
            (CountMode::Duplicate, n) => n,
            (CountMode::Aggregate, _) => 1,
        }
    }
}

/// One output record.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub subject_id: u64,
    pub segment_id: u64,
    pub speaker: String,
    pub sentence: String,
    pub row_number: usize,
    pub switch_count: usize,
}

/// Failure while walking segments: either bad content or a broken source.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum State {
    AwaitingSegment,
    InSegment(u64),
}

/// Groups speaker lines into segments and accumulates rows for one file.
pub struct SegmentParser<'a> {
    format: &'a ChatFormat,
    count_mode: CountMode,
    subject_id: u64,
    rows: Vec<Row>,
}

impl<'a> SegmentParser<'a> {
    pub fn new(format: &'a ChatFormat, count_mode: CountMode, subject_id: u64) -> Self {
        Self {
            format,
            count_mode,
            subject_id,
            rows: Vec::new(),
        }
    }

    /// Consume the rest of the reader and return the rows in document order.
    pub fn parse<R: BufRead>(
        mut self,
        reader: &mut LookaheadReader<R>,
    ) -> Result<Vec<Row>, SegmentError> {
        let mut state = State::AwaitingSegment;

        loop {
            state = match state {
                State::AwaitingSegment => {
                    if !reader.advance()? {
                        break;
                    }
                    State::InSegment(self.open_segment(reader)?)
                }
                State::InSegment(segment) => {
                    self.consume_segment(reader, segment)?;
                    State::AwaitingSegment
                }
            };
        }

        Ok(self.rows)
    }

    /// Read the segment number from the current line.
    fn open_segment<R: BufRead>(&self, reader: &LookaheadReader<R>) -> Result<u64, ParseError> {
        let line = reader.current().unwrap_or_default();
        let line_number = reader.line_number();

        if !is_segment_header(line, self.format) {
            return Err(ParseError::SegmentHeader {
                line_number,
                line: line.to_string(),
            });
        }

        let segment = segment_number(line, self.format).ok_or_else(|| {
            ParseError::SegmentNumber {
                line_number,
                line: line.to_string(),
            }
        })?;
        tracing::debug!(segment, line_number, "segment opened");
        Ok(segment)
    }

    /// Emit rows until the next segment header, the end marker, or the reader runs out.
    fn consume_segment<R: BufRead>(
        &mut self,
        reader: &mut LookaheadReader<R>,
        segment: u64,
    ) -> Result<(), SegmentError> {
        while reader
            .peek()
            .is_some_and(|next| !is_segment_header(next, self.format))
        {
            if !reader.advance()? {
                break;
            }
            let line = reader.current().unwrap_or_default();
            if is_end(line, self.format) {
                tracing::debug!(segment, line_number = reader.line_number(), "end marker");
                break;
            }
            self.emit(line, reader.line_number(), segment)?;
        }
        Ok(())
    }

    fn emit(&mut self, line: &str, line_number: usize, segment: u64) -> Result<(), ParseError> {
        if !has_switch_marker(line, self.format) {
            return Ok(());
        }

        let switches = switch_marker_count(line, self.format);
        let utterance = parse_line(line, self.format).map_err(|e| e.at_line(line_number))?;
        let row = Row {
            subject_id: self.subject_id,
            segment_id: segment,
            speaker: utterance.speaker,
            sentence: utterance.sentence,
            row_number: line_number,
            switch_count: switches,
        };

        let copies = self.count_mode.rows_for(switches);
        self.rows.extend(std::iter::repeat(row).take(copies));
        Ok(())
    }
}
