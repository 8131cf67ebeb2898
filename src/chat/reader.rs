//! Lookahead line reader.
//!
//! Buffers exactly one current and one upcoming line over a line source.
//! Blank lines, continuation lines (leading whitespace) and comment / dependent
//! tier lines (leading `%`) are suppressed and never reach consumers, but they
//! still count towards the physical line numbers reported for visible lines.

use std::io::{self, BufRead, Lines};

/// A visible line together with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumberedLine {
    number: usize,
    text: String,
}

/// Scanner over a transcript with one line of lookahead.
pub struct LookaheadReader<R> {
    lines: Lines<R>,
    comment_marker: char,
    physical: usize,
    current: Option<NumberedLine>,
    next: Option<NumberedLine>,
}

impl<R: BufRead> LookaheadReader<R> {
    /// Create a reader and prime the current and upcoming lines.
    pub fn new(source: R, comment_marker: char) -> io::Result<Self> {
        let mut reader = Self {
            lines: source.lines(),
            comment_marker,
            physical: 0,
            current: None,
            next: None,
        };
        reader.current = reader.pull_visible()?;
        reader.next = reader.pull_visible()?;
        Ok(reader)
    }

    /// The line under the cursor, `None` once the source is exhausted.
    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|line| line.text.as_str())
    }

    /// The upcoming visible line without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.next.as_ref().map(|line| line.text.as_str())
    }

    /// Physical line number of the current line (0 when there is none).
    pub fn line_number(&self) -> usize {
        self.current.as_ref().map_or(0, |line| line.number)
    }

    /// Move the cursor to the upcoming line and pull a new upcoming line.
    ///
    /// Returns `false` once the source runs out while looking for the new
    /// upcoming line. The line that just became current is then the last one
    /// and callers stop without processing it.
    pub fn advance(&mut self) -> io::Result<bool> {
        self.current = self.next.take();
        self.next = self.pull_visible()?;
        Ok(self.next.is_some())
    }

    /// Pull lines from the source until one is visible.
    fn pull_visible(&mut self) -> io::Result<Option<NumberedLine>> {
        for raw in self.lines.by_ref() {
            let raw = raw?;
            self.physical += 1;

            let raw = if self.physical == 1 {
                raw.strip_prefix('\u{feff}').unwrap_or(&raw).to_string()
            } else {
                raw
            };

            if is_suppressed(&raw, self.comment_marker) {
                continue;
            }

            return Ok(Some(NumberedLine {
                number: self.physical,
                text: raw.trim().to_string(),
            }));
        }
        Ok(None)
    }
}

/// Blank, continuation (leading whitespace) and comment lines are never visible.
fn is_suppressed(raw: &str, comment_marker: char) -> bool {
    match raw.chars().next() {
        None => true,
        Some(first) => first.is_whitespace() || first == comment_marker,
    }
}
