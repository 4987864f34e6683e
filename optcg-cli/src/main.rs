//! optcg-arena CLI
//!
//! Builds a merged One Piece card catalog from scraped JSON sources and
//! projects it into a TCG Arena game file.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;
mod settings;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref())?;

    let settings_path = cli.settings.unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings(&settings_path);

    match cli.command {
        Commands::Cards {
            source_dir,
            output,
            card_back,
        } => commands::run_cards(
            &settings,
            source_dir,
            output,
            card_back,
            cli.quiet,
            cli.logfile.is_some(),
        ),
        Commands::Game {
            cards,
            cards_url,
            output,
            card_back,
            name,
        } => commands::run_game(&settings, cards, cards_url, output, card_back, name),
    }
}
