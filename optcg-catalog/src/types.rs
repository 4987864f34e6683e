//! Data model types for the card catalog.
//!
//! These types represent both sides of the pipeline: loose raw records lifted
//! out of source JSON files, and the fixed-schema canonical cards written to
//! the catalog file.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Synthetic field carrying the provenance path of a raw record.
pub const SOURCE_FILE_FIELD: &str = "_source_file";

/// Image used on the back face of every card unless the caller overrides it.
pub const DEFAULT_CARD_BACK: &str = "https://cf.geekdo-images.com/cpyej29PfijgBDtiOuSFsQ__imagepage/img/aDMUMr-kD-RtLyOR2sKmzXtaXtk=/fit-in/900x600/filters:no_upscale():strip_icc()/pic6974116.jpg";

// ── Raw records ─────────────────────────────────────────────────────────────

/// One parsed source file together with its path relative to the ingestion root.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Relative, `/`-separated provenance path.
    pub path: String,
    pub value: Value,
}

impl SourceDocument {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

/// A card-like object found inside a source document.
///
/// The field map is kept exactly as the source spelled it; only the merger
/// rewrites fields, and only with populated values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCardRecord {
    fields: Map<String, Value>,
}

impl RawCardRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap `fields` and tag them with `source` unless a provenance field is
    /// already present.
    pub fn with_source(mut fields: Map<String, Value>, source: &str) -> Self {
        fields
            .entry(SOURCE_FILE_FIELD)
            .or_insert_with(|| Value::String(source.to_string()));
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Provenance path of the record, if it was tagged.
    pub fn source_file(&self) -> Option<&str> {
        self.fields.get(SOURCE_FILE_FIELD).and_then(Value::as_str)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for RawCardRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

// ── Canonical cards ─────────────────────────────────────────────────────────

/// The `type` field of a canonical card.
///
/// Leaders carry no type string; the game runtime expects `false` on the card
/// and front face, and `""` on the back face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardType {
    Named(String),
    Leader,
}

impl CardType {
    pub fn is_leader(&self) -> bool {
        matches!(self, CardType::Leader)
    }

    /// The value rendered on the back face: leaders collapse to an empty string.
    pub fn for_back(&self) -> CardType {
        match self {
            CardType::Named(name) => CardType::Named(name.clone()),
            CardType::Leader => CardType::Named(String::new()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CardType::Named(name) => Some(name),
            CardType::Leader => None,
        }
    }
}

impl Default for CardType {
    fn default() -> Self {
        CardType::Named(String::new())
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardType::Named(name) => serializer.serialize_str(name),
            CardType::Leader => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Flag(bool),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(name) => CardType::Named(name),
            Repr::Flag(false) => CardType::Leader,
            Repr::Flag(true) => CardType::Named(String::new()),
        })
    }
}

/// Display data for one side of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardFace {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub cost: Option<i64>,
    pub image: String,
    pub is_horizontal: bool,
}

/// Front and back faces of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFaces {
    pub front: CardFace,
    pub back: CardFace,
}

/// A card in its final, fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalCard {
    pub id: String,
    pub number: String,
    pub name: String,
    /// One of Leader/Character/Event/Stage/DON!!, or the source value unchanged.
    pub category: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub cost: Option<i64>,
    pub cost_text: String,
    pub power: String,
    pub counter: String,
    pub life: String,
    pub colors: Vec<String>,
    pub attributes: Vec<String>,
    pub types: Vec<String>,
    pub rarity: String,
    pub block_number: String,
    pub pack_id: String,
    pub effect: String,
    pub trigger: String,
    pub text: String,
    pub image: String,
    pub source_file: String,
    pub face: CardFaces,
}

impl CanonicalCard {
    pub fn is_leader(&self) -> bool {
        self.category.eq_ignore_ascii_case("leader")
    }
}

/// The finished catalog, keyed by card id. Sorted so output is stable.
pub type Catalog = BTreeMap<String, CanonicalCard>;
