//! Convert command handler

use std::path::Path;

use anyhow::Result;

use chatcsv::cli::ConvertArgs;
use chatcsv::Config;

/// Load the configuration, apply the flags and convert.
///
/// The summary goes to stderr so `-o -` leaves stdout to the table.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ConvertArgs, config_path: Option<&Path>, quiet: bool) -> Result<()> {
    let config = args.apply(Config::load(config_path)?);
    tracing::debug!(?config, "effective configuration");

    let summary = chatcsv::run(&config)?;

    if !quiet {
        let destination = if config.output.path == Path::new("-") {
            "stdout".to_string()
        } else {
            config.output.path.display().to_string()
        };
        eprintln!(
            "Converted {} file(s), skipped {}, wrote {} row(s) to {}",
            summary.files_processed, summary.files_skipped, summary.rows_written, destination
        );
    }
    Ok(())
}
