//! Line classification predicates.

use super::format::ChatFormat;

/// Whether the line opens a new segment (`@T: <n>`).
pub fn is_segment_header(line: &str, format: &ChatFormat) -> bool {
    line.starts_with(format.segment_prefix.as_str())
}

/// Whether the line marks the end of the transcript (`@End`).
pub fn is_end(line: &str, format: &ChatFormat) -> bool {
    line.starts_with(format.end_marker.as_str())
}

/// Whether the line is a metadata header of the given category.
///
/// Speaker-turn lines are never headers.
pub fn is_header(line: &str, category: &[String], format: &ChatFormat) -> bool {
    if line.starts_with(format.speaker_marker) {
        return false;
    }
    category.iter().any(|prefix| line.starts_with(prefix.as_str()))
}

/// Extract the segment number from a segment header line.
///
/// Whitespace after the prefix is optional and anything after the number is ignored.
pub fn segment_number(line: &str, format: &ChatFormat) -> Option<u64> {
    let rest = line.strip_prefix(format.segment_prefix.as_str())?.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().ok()
}
