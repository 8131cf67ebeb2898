//! Per-file driver: subject id, header skipping and segment parsing.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::classify::is_header;
use super::error::{ParseError, TranscriptError};
use super::format::ChatFormat;
use super::reader::LookaheadReader;
use super::segment::{CountMode, Row, SegmentError, SegmentParser};
use crate::files::filename;

/// Advance past upcoming lines that belong to `category`.
///
/// Returns the number of lines skipped.
pub fn skip_headers<R: BufRead>(
    reader: &mut LookaheadReader<R>,
    category: &[String],
    format: &ChatFormat,
) -> io::Result<usize> {
    let mut skipped = 0;
    while reader
        .peek()
        .is_some_and(|next| is_header(next, category, format))
    {
        reader.advance()?;
        skipped += 1;
    }
    Ok(skipped)
}

/// Skip the metadata block, category by category in fixed order.
///
/// The ordered pass is repeated until it makes no progress, so headers that
/// interleave across categories (e.g. `@Comment` between `@ID` lines) are
/// consumed and a second call is always a no-op.
pub fn skip_all_headers<R: BufRead>(
    reader: &mut LookaheadReader<R>,
    format: &ChatFormat,
) -> io::Result<usize> {
    let mut total = 0;
    loop {
        let mut pass = 0;
        for (name, category) in format.headers.in_order() {
            let skipped = skip_headers(reader, category, format)?;
            if skipped > 0 {
                tracing::debug!(category = name, skipped, "skipped header lines");
            }
            pass += skipped;
        }
        if pass == 0 {
            return Ok(total);
        }
        total += pass;
    }
}

/// Turns whole transcripts into rows.
#[derive(Debug, Clone)]
pub struct TranscriptParser<'a> {
    format: &'a ChatFormat,
    count_mode: CountMode,
    extension: &'a str,
}

impl<'a> TranscriptParser<'a> {
    /// `extension` is the transcript file extension without the dot (usually `cha`).
    pub fn new(format: &'a ChatFormat, count_mode: CountMode, extension: &'a str) -> Self {
        Self {
            format,
            count_mode,
            extension,
        }
    }

    /// Parse one transcript file.
    ///
    /// The file name is validated before the file is opened.
    pub fn process_file(&self, path: &Path) -> Result<Vec<Row>, TranscriptError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let subject_id = self.subject_id(&name).map_err(|source| TranscriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let file = File::open(path).map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_source(subject_id, BufReader::new(file))
            .map_err(|e| match e {
                SegmentError::Parse(source) => TranscriptError::Parse {
                    path: path.to_path_buf(),
                    source,
                },
                SegmentError::Io(source) => TranscriptError::Read {
                    path: path.to_path_buf(),
                    source,
                },
            })
    }

    /// Parse transcript content held in memory under the given file name.
    pub fn process_str(&self, filename: &str, content: &str) -> Result<Vec<Row>, SegmentError> {
        let subject_id = self.subject_id(filename)?;
        self.parse_source(subject_id, content.as_bytes())
    }

    fn subject_id(&self, filename: &str) -> Result<u64, ParseError> {
        filename::subject_id(filename, self.extension).ok_or_else(|| {
            ParseError::FilenameFormat {
                filename: filename.to_string(),
                extension: self.extension.to_string(),
            }
        })
    }

    fn parse_source<R: BufRead>(&self, subject_id: u64, source: R) -> Result<Vec<Row>, SegmentError> {
        let mut reader = LookaheadReader::new(source, self.format.comment_marker)?;
        skip_all_headers(&mut reader, self.format)?;
        SegmentParser::new(self.format, self.count_mode, subject_id).parse(&mut reader)
    }
}
