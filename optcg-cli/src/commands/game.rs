use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use optcg_game::{GameOptions, build_game, load_catalog, write_game};

use crate::error::CliError;
use crate::settings::Settings;

/// Project the catalog at `cards` into a game document at `output`.
pub(crate) fn run_game(
    settings: &Settings,
    cards: PathBuf,
    cards_url: String,
    output: PathBuf,
    card_back: Option<String>,
    name: Option<String>,
) -> Result<(), CliError> {
    let catalog = load_catalog(&cards)?;
    log::debug!("Loaded {} cards from {}", catalog.len(), cards.display());

    let options = GameOptions {
        cards_url,
        card_back: settings.card_back(card_back),
        name: settings.game_name(name),
        menu_background: settings.menu_background(),
    };
    let document = build_game(&catalog, &options);
    write_game(&document, &output)?;

    println!(
        "Generated {} using {} cards",
        output.display(),
        catalog.len().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
