//! Transcript file name parsing.
//!
//! Transcripts are named `<subject>_<session>.<extension>`, for example
//! `12_3.cha` for the third recording of subject 12. Both groups are plain
//! decimal digits; the subject group becomes the subject id of every row.

/// The numeric parts of a transcript file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptName {
    pub subject_id: u64,
    pub session: u64,
}

impl TranscriptName {
    /// Parse `filename` (no directory part) against the expected extension.
    ///
    /// Returns `None` if the name does not match `<digits>_<digits>.<extension>`
    /// or a group does not fit in a `u64`.
    pub fn parse(filename: &str, extension: &str) -> Option<Self> {
        let stem = filename.strip_suffix(extension)?.strip_suffix('.')?;
        let (subject, session) = stem.split_once('_')?;

        Some(Self {
            subject_id: parse_digits(subject)?,
            session: parse_digits(session)?,
        })
    }
}

/// Subject id encoded in a transcript file name.
pub fn subject_id(filename: &str, extension: &str) -> Option<u64> {
    TranscriptName::parse(filename, extension).map(|name| name.subject_id)
}

/// Whether `filename` carries the transcript extension.
///
/// This only looks at the extension; the name itself is validated when parsed.
pub fn has_extension(filename: &str, extension: &str) -> bool {
    filename
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Parse a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
