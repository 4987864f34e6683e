//! Assembling the game document from catalog metadata and the static rule set.

use std::collections::BTreeMap;
use std::path::Path;

use optcg_catalog::{CanonicalCard, DEFAULT_CARD_BACK, write_json_file};

use crate::error::ProjectError;
use crate::metadata::{GameMetadata, collect_metadata};
use crate::template::*;

/// Caller-supplied values for the game document.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// URL the runtime fetches the card catalog from.
    pub cards_url: String,
    pub card_back: String,
    pub name: String,
    pub menu_background: String,
}

impl GameOptions {
    pub fn new(cards_url: impl Into<String>) -> Self {
        Self {
            cards_url: cards_url.into(),
            card_back: DEFAULT_CARD_BACK.to_string(),
            name: DEFAULT_GAME_NAME.to_string(),
            menu_background: DEFAULT_MENU_BACKGROUND.to_string(),
        }
    }
}

/// Build the game document for `cards`.
pub fn build_game(cards: &[CanonicalCard], options: &GameOptions) -> GameDocument {
    let meta = collect_metadata(cards);
    assemble(&meta, options)
}

fn assemble(meta: &GameMetadata, options: &GameOptions) -> GameDocument {
    GameDocument {
        name: options.name.clone(),
        menu_background_image: options.menu_background.clone(),
        default_ressources: DefaultResources {
            backgrounds: vec![options.menu_background.clone()],
            decks_url: String::new(),
        },
        custom_help: CUSTOM_HELP.to_string(),
        card_rotation: 90,
        cards: CardsSource {
            data_url: options.cards_url.clone(),
            card_back: options.card_back.clone(),
        },
        deck_building: deck_building(),
        gameplay: BTreeMap::from([(CLASSIC_FORMAT.to_string(), classic_gameplay())]),
        metadata: DocumentMetadata {
            generated_by: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            cards_count: meta.total,
            leaders_count: meta.leaders,
            main_deck_pool_count: meta.non_leaders,
            detected_colors: meta.colors.clone(),
            detected_categories: meta.categories.clone(),
            detected_rarities: meta.rarities.clone(),
        },
    }
}

/// Write the game document as pretty JSON.
pub fn write_game(document: &GameDocument, path: &Path) -> Result<(), ProjectError> {
    write_json_file(document, path)?;
    Ok(())
}
