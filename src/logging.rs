//! Diagnostic output via `tracing`.
//!
//! Logs go to stderr so the table can be written to stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags.
///
/// `-q` shows errors only, the default shows per-file progress, `-v` adds
/// segment and header details and `-vv` everything.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "chatcsv=error";
    }
    match verbose {
        0 => "chatcsv=info",
        1 => "chatcsv=debug",
        _ => "chatcsv=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
