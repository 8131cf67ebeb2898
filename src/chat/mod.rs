//! CHAT transcript parsing engine.
//!
//! A transcript is read through a [`LookaheadReader`], its metadata header block
//! is skipped category by category, and the [`SegmentParser`] turns every
//! speaker line carrying a code-switch marker into one or more [`Row`]s.
//!
//! # Module Structure
//!
//! - [`format`] - Markup tokens and header categories
//! - [`reader`] - Lookahead reader with line suppression
//! - [`classify`] - Line predicates
//! - [`line`] - Speaker-turn decomposition and switch counting
//! - [`segment`] - Segment state machine and counting policy
//! - [`transcript`] - Per-file driver

pub mod classify;
pub mod error;
pub mod format;
pub mod line;
pub mod reader;
pub mod segment;
pub mod transcript;

pub use error::{ParseError, TranscriptError};
pub use format::{ChatFormat, HeaderCategories};
pub use line::{has_switch_marker, parse_line, switch_marker_count, Utterance};
pub use reader::LookaheadReader;
pub use segment::{CountMode, Row, SegmentError, SegmentParser};
pub use transcript::{skip_all_headers, skip_headers, TranscriptParser};
