//! chatcsv - CHAT transcripts to CSV

mod commands;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use chatcsv::cli::{Cli, Commands, ConfigAction};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let matches = Cli::command()
        .version(chatcsv::version_string())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    chatcsv::logging::init(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();

    match cli.command {
        None => commands::convert::handle(&cli.convert, config_path, cli.quiet),
        Some(Commands::Convert(args)) => commands::convert::handle(&args, config_path, cli.quiet),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(config_path),
            ConfigAction::Path => commands::config::handle_path(config_path),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
