//! Card catalog data model, field vocabulary, and normalization.
//!
//! This crate defines the raw and canonical card types without any filesystem
//! traversal. `optcg-import` feeds it merged raw records; `optcg-game` reads the
//! canonical cards back to derive game metadata.

pub mod coerce;
pub mod fields;
pub mod json;
pub mod normalize;
pub mod types;

pub use fields::{card_identifier, card_number, is_populated};
pub use json::{JsonWriteError, to_pretty_json, write_json_file};
pub use normalize::normalize_card;
pub use types::*;
