//! Reading a catalog file back for projection.
//!
//! The normal input is the object written by the cards command, keyed by card
//! id. Older catalogs wrapped raw card objects in a `"cards"` array; those
//! entries are run through the normalizer so the projector always sees
//! canonical cards.

use std::path::Path;

use serde_json::{Map, Value};

use optcg_catalog::{CanonicalCard, DEFAULT_CARD_BACK, RawCardRecord, normalize_card};

use crate::error::ProjectError;

/// Load every card from a catalog file, in file order.
pub fn load_catalog(path: &Path) -> Result<Vec<CanonicalCard>, ProjectError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProjectError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let payload: Value = serde_json::from_str(&contents).map_err(|e| ProjectError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(cards_from_value(payload))
}

/// Extract canonical cards from a parsed catalog payload.
///
/// Entries that are not objects are dropped.
pub fn cards_from_value(payload: Value) -> Vec<CanonicalCard> {
    match payload {
        Value::Object(mut map) => match map.remove("cards") {
            Some(Value::Array(items)) => objects(items).into_iter().map(normalize_entry).collect(),
            Some(other) => {
                map.insert("cards".to_string(), other);
                keyed_cards(map)
            }
            None => keyed_cards(map),
        },
        Value::Array(items) => objects(items).into_iter().map(card_from_entry).collect(),
        _ => Vec::new(),
    }
}

fn keyed_cards(map: Map<String, Value>) -> Vec<CanonicalCard> {
    objects(map.into_iter().map(|(_, v)| v))
        .into_iter()
        .map(card_from_entry)
        .collect()
}

fn objects(items: impl IntoIterator<Item = Value>) -> Vec<Map<String, Value>> {
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

fn card_from_entry(entry: Map<String, Value>) -> CanonicalCard {
    match serde_json::from_value::<CanonicalCard>(Value::Object(entry.clone())) {
        Ok(card) => card,
        Err(e) => {
            log::debug!("Catalog entry is not canonical ({}); normalizing it", e);
            normalize_entry(entry)
        }
    }
}

fn normalize_entry(entry: Map<String, Value>) -> CanonicalCard {
    normalize_card(&RawCardRecord::new(entry), DEFAULT_CARD_BACK)
}
