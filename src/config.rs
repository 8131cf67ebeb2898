//! Configuration file handling.
//!
//! Settings live in `~/.config/chatcsv/config.toml` (or the path given with
//! `--config`). Every field has a default, so a missing file or a partial file
//! is fine; invalid TOML is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatFormat, CountMode};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub parse: ParseConfig,
    pub format: ChatFormat,
}

/// Where transcripts are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding the transcripts (or a single transcript file)
    pub sources: PathBuf,
    /// Transcript extension, without the dot
    pub extension: String,
    /// File names to leave out
    pub exclude: Vec<String>,
}

/// Where and how the table is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output CSV file, `-` for stdout
    pub path: PathBuf,
    pub delimiter: char,
}

/// Parsing policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub count_mode: CountMode,
    pub on_error: OnError,
}

/// What to do when a transcript fails to parse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop the run at the first malformed file; nothing is written.
    #[default]
    Abort,
    /// Log the failure, leave the file out and continue.
    Skip,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sources: PathBuf::from("./sources"),
            extension: "cha".to_string(),
            exclude: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./output/output.csv"),
            delimiter: ',',
        }
    }
}

impl OutputConfig {
    /// The delimiter as a single byte, as the CSV writer needs it.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!(
                "output.delimiter must be an ASCII character, got {:?}",
                self.delimiter
            );
        }
        Ok(self.delimiter as u8)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields use their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `custom` if given, otherwise from the default path.
    ///
    /// Only the default path may be absent; an explicit path must exist.
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom {
            return Self::load_from(path);
        }

        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = ?path, "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Default configuration file path (`<config dir>/chatcsv/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("chatcsv").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        self.output.delimiter_byte()?;
        if self.input.extension.is_empty() {
            bail!("input.extension must not be empty");
        }
        if self.format.segment_prefix.is_empty() || self.format.end_marker.is_empty() {
            bail!("format.segment_prefix and format.end_marker must not be empty");
        }
        if self.format.switch_markers.iter().all(|m| m.is_empty()) {
            bail!("format.switch_markers must contain at least one marker");
        }
        Ok(())
    }
}
