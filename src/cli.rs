//! Command-line interface for chatcsv
//!
//! Provides argument parsing using clap derive macros. Running without a
//! subcommand converts transcripts:
//! `chatcsv -s ./sources -o ./output/output.csv`.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::chat::CountMode;
use crate::config::{Config, OnError};

/// Convert CHAT transcripts into a CSV table of code-switching utterances
#[derive(Parser, Debug)]
#[command(name = "chatcsv", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: segments and headers, -vv: everything)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Overrides for the conversion settings in the config file
#[derive(Args, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Directory with the transcripts to convert (or a single transcript)
    #[arg(long, short = 's', value_name = "DIR")]
    pub sources: Option<PathBuf>,

    /// CSV file to write, `-` for stdout
    #[arg(long = "output-filename", short = 'o', alias = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rows per line with several switch markers
    #[arg(long, value_enum, value_name = "MODE")]
    pub count_mode: Option<CountMode>,

    /// Stop at the first malformed transcript or skip it
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<OnError>,

    /// Transcript file extension, without the dot
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// File name to leave out (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
}

impl ConvertArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(sources) = &self.sources {
            config.input.sources = sources.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(mode) = self.count_mode {
            config.parse.count_mode = mode;
        }
        if let Some(policy) = self.on_error {
            config.parse.on_error = policy;
        }
        if let Some(extension) = &self.extension {
            config.input.extension = extension.clone();
        }
        config.input.exclude.extend(self.exclude.iter().cloned());
        config
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert transcripts to CSV (default when no command is given)
    Convert(ConvertArgs),

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the default configuration file path
    Path,
}
