//! Projection of the card catalog into a TCG Arena game document.
//!
//! The projector has no merge or normalization logic of its own: it reads
//! canonical cards, derives summary facts, and combines them with the static
//! One Piece rule set.

pub mod catalog;
pub mod error;
pub mod game;
pub mod metadata;
pub mod template;

pub use catalog::{cards_from_value, load_catalog};
pub use error::ProjectError;
pub use game::{GameOptions, build_game, write_game};
pub use metadata::{GameMetadata, collect_metadata};
pub use template::GameDocument;
