//! Optional settings file (`~/.config/optcg-arena/settings.toml`).
//!
//! Every value resolves through the same chain: CLI flag, then the settings
//! file, then the built-in default.
//!
//! ```toml
//! [cards]
//! card_back = "https://example.com/back.png"
//!
//! [game]
//! name = "One Piece Card Game"
//! menu_background = "https://example.com/menu.png"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use optcg_catalog::DEFAULT_CARD_BACK;
use optcg_game::template::{DEFAULT_GAME_NAME, DEFAULT_MENU_BACKGROUND};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub cards: CardsSettings,
    pub game: GameSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CardsSettings {
    pub card_back: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GameSettings {
    pub name: Option<String>,
    pub menu_background: Option<String>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("optcg-arena").join("settings.toml")
}

/// Load settings from `path`. A missing file yields defaults; an unreadable
/// or malformed one is reported and ignored.
pub(crate) fn load_settings(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            log::warn!(
                "Ignoring unreadable settings file {}: {}",
                path.display(),
                e
            );
            return Settings::default();
        }
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!(
                "Ignoring malformed settings file {}: {}",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}

fn resolve(cli: Option<String>, saved: &Option<String>, default: &str) -> String {
    cli.or_else(|| saved.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default.to_string())
}

impl Settings {
    pub(crate) fn card_back(&self, cli: Option<String>) -> String {
        resolve(cli, &self.cards.card_back, DEFAULT_CARD_BACK)
    }

    pub(crate) fn game_name(&self, cli: Option<String>) -> String {
        resolve(cli, &self.game.name, DEFAULT_GAME_NAME)
    }

    pub(crate) fn menu_background(&self) -> String {
        resolve(None, &self.game.menu_background, DEFAULT_MENU_BACKGROUND)
    }
}
