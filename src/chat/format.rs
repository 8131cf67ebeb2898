//! Markup constants for the subset of CHAT consumed by the parser.
//!
//! Everything the parser matches against lives in one [`ChatFormat`] value. It is
//! built once (defaults, optionally overridden from the `[format]` config section)
//! and passed by reference into every component.

use serde::{Deserialize, Serialize};

/// Header prefixes grouped into the five CHAT header categories.
///
/// Categories are skipped in declaration order, see [`HeaderCategories::in_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderCategories {
    /// Hidden headers written by the CLAN editor (`@UTF8`, `@Font`, ...)
    pub hidden: Vec<String>,
    /// Headers that open every transcript (`@Begin`, `@Participants`, `@ID`, ...)
    pub initial: Vec<String>,
    /// Headers that carry a participant code (`@Birth of CHI`, ...)
    pub participant_specific: Vec<String>,
    /// Headers whose value holds for the whole file
    pub constant: Vec<String>,
    /// Headers that may change between gems (`@Situation`, `@G`, ...)
    pub changeable: Vec<String>,
}

impl HeaderCategories {
    /// The categories in the order they are skipped.
    pub fn in_order(&self) -> [(&'static str, &[String]); 5] {
        [
            ("hidden", &self.hidden),
            ("initial", &self.initial),
            ("participant-specific", &self.participant_specific),
            ("constant", &self.constant),
            ("changeable", &self.changeable),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for HeaderCategories {
    fn default() -> Self {
        Self {
            hidden: strings(&["@Font", "@UTF8", "@PID", "@ColorWords", "@Window"]),
            initial: strings(&[
                "@Begin",
                "@Languages",
                "@Participants",
                "@Options",
                "@ID",
                "@Media",
            ]),
            participant_specific: strings(&["@Birth of", "@Birthplace of", "@L1 of"]),
            constant: strings(&[
                "@Color words",
                "@Comment",
                "@Date",
                "@Location",
                "@Number",
                "@Recording Quality",
                "@Room Layout",
                "@Tape Location",
                "@Time Duration",
                "@Time Start",
                "@Transcriber",
                "@Transcription",
                "@Types",
                "@Videos",
                "@Warning",
            ]),
            changeable: strings(&[
                "@Activities",
                "@Bck",
                "@Bg",
                "@Blank",
                "@Comment",
                "@Date",
                "@Eg",
                "@G",
                "@New Episode",
                "@New Language",
                "@Page",
                "@Situation",
            ]),
        }
    }
}

/// Tokens recognized by the classifier and the line decomposer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatFormat {
    /// Prefix of a segment header line, followed by the segment number
    pub segment_prefix: String,
    /// Prefix of the end-of-transcript line
    pub end_marker: String,
    /// First character of a speaker-turn line
    pub speaker_marker: char,
    /// First character of a suppressed comment / dependent-tier line
    pub comment_marker: char,
    /// Inline tokens that mark a code-switch
    pub switch_markers: Vec<String>,
    pub headers: HeaderCategories,
}

impl Default for ChatFormat {
    fn default() -> Self {
        Self {
            segment_prefix: "@T:".to_string(),
            end_marker: "@End".to_string(),
            speaker_marker: '*',
            comment_marker: '%',
            switch_markers: strings(&["int@x", "@s"]),
            headers: HeaderCategories::default(),
        }
    }
}
