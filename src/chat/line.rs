//! Speaker-turn decomposition and switch-marker counting.
//!
//! A speaker-turn line has the shape
//!
//! ```text
//! *MOT:\t[- eng] where is the int@x ball ?
//! ^^^^^  ^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^
//! speaker  |     sentence
//!       annotations (zero or more "[- <letters>]" groups)
//! ```

use super::error::ParseError;
use super::format::ChatFormat;

/// A decomposed speaker-turn line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub speaker: String,
    /// Language codes of leading `[- xxx]` precodes, in order.
    pub annotations: Vec<String>,
    pub sentence: String,
}

/// Split a speaker-turn line into speaker, annotations and sentence.
///
/// The speaker runs up to the first `:` and must be non-empty.
/// Bracket groups that are not exactly `[- <ascii letters>]` end the annotation
/// run and stay in the sentence. The returned error carries line number 0.
pub fn parse_line(line: &str, format: &ChatFormat) -> Result<Utterance, ParseError> {
    let malformed = || ParseError::LineFormat {
        line_number: 0,
        line: line.to_string(),
    };

    let body = line
        .strip_prefix(format.speaker_marker)
        .ok_or_else(malformed)?;
    let (speaker, rest) = body.split_once(':').ok_or_else(malformed)?;
    if speaker.is_empty() {
        return Err(malformed());
    }

    let mut rest = rest.trim_start();
    let mut annotations = Vec::new();
    while let Some((code, after)) = split_annotation(rest) {
        annotations.push(code.to_string());
        rest = after.trim_start();
    }

    Ok(Utterance {
        speaker: speaker.to_string(),
        annotations,
        sentence: rest.to_string(),
    })
}

/// Split a leading `[- code]` group off `text`.
fn split_annotation(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix("[-")?;
    let mut chars = inner.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }
    let inner = chars.as_str();
    let close = inner.find(']')?;
    let code = &inner[..close];
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((code, &inner[close + 1..]))
}

/// Count non-overlapping switch markers in `line`, scanning left to right.
///
/// At each position the first marker in [`ChatFormat::switch_markers`] that matches wins.
pub fn switch_marker_count(line: &str, format: &ChatFormat) -> usize {
    let mut count = 0;
    let mut rest = line;
    while !rest.is_empty() {
        let matched = format
            .switch_markers
            .iter()
            .find(|marker| !marker.is_empty() && rest.starts_with(marker.as_str()));
        match matched {
            Some(marker) => {
                count += 1;
                rest = &rest[marker.len()..];
            }
            None => {
                let step = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[step..];
            }
        }
    }
    count
}

/// Whether `line` carries at least one switch marker.
pub fn has_switch_marker(line: &str, format: &ChatFormat) -> bool {
    format
        .switch_markers
        .iter()
        .any(|marker| !marker.is_empty() && line.contains(marker.as_str()))
}
