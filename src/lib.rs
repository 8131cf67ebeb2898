//! chatcsv - CHAT transcripts to CSV
//!
//! Parses transcripts in the CHAT markup, finds speaker lines that carry
//! code-switch markers (`int@x`, `@s`) and flattens them into a table tagged
//! with subject, segment, speaker and switch count.

pub mod chat;
pub mod cli;
pub mod config;
pub mod convert;
pub mod files;
pub mod logging;
pub mod output;

pub use chat::{ChatFormat, CountMode, ParseError, Row, TranscriptError, TranscriptParser};
pub use config::{Config, OnError};
pub use convert::{run, ConvertSummary};

/// Version string with the git commit and build date when available.
///
/// Returns `"0.1.0 (abc1234 2026-01-01)"` for dev builds and `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = option_env!("CHATCSV_BUILD_DATE").filter(|d| !d.is_empty() && *d != "unknown");
    let sha = option_env!("VERGEN_GIT_SHA")
        .filter(|s| !s.is_empty() && *s != "unknown")
        .map(|s| &s[..s.len().min(7)]);

    match (sha, date) {
        (Some(sha), Some(date)) => format!("{} ({} {})", version, sha, date),
        (Some(sha), None) => format!("{} ({})", version, sha),
        _ => version.to_string(),
    }
}
