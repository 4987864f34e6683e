//! Field vocabulary for heterogeneous card sources.
//!
//! Every logical card field is looked up through an ordered list of candidate
//! keys; the first *populated* key wins. A value is populated unless it is
//! null, an empty string, an empty array, or an empty object.

use serde_json::{Map, Value};

use crate::types::RawCardRecord;

pub const IDENTIFIER_KEYS: &[&str] = &["id", "code", "card_id", "number", "cardNumber"];
pub const NUMBER_KEYS: &[&str] = &["number", "cardNumber", "card_number", "code", "id"];
pub const NAME_KEYS: &[&str] = &["name", "card_name", "name_en"];
pub const CATEGORY_KEYS: &[&str] = &["category", "card_category", "kind"];
pub const TYPE_KEYS: &[&str] = &["type", "card_type"];
pub const COLOR_KEYS: &[&str] = &["colors", "color"];
pub const ATTRIBUTE_KEYS: &[&str] = &["attributes", "attribute"];
pub const TYPES_KEYS: &[&str] = &["types", "features", "traits"];
pub const RARITY_KEYS: &[&str] = &["rarity", "rare"];
pub const BLOCK_KEYS: &[&str] = &["block_number", "block", "blockNumber"];
pub const PACK_KEYS: &[&str] = &["pack_id", "set", "set_id"];
pub const EFFECT_KEYS: &[&str] = &["effect", "text", "card_text", "ability"];
pub const TRIGGER_KEYS: &[&str] = &["trigger", "trigger_effect"];
pub const COST_KEYS: &[&str] = &["cost"];
pub const POWER_KEYS: &[&str] = &["power"];
pub const COUNTER_KEYS: &[&str] = &["counter"];
pub const LIFE_KEYS: &[&str] = &["life"];

/// Flat keys that hold an image URL directly.
pub const IMAGE_KEYS: &[&str] = &[
    "image",
    "image_url",
    "img",
    "thumbnail",
    "img_full_url",
    "img_url",
];

/// Keys of nested image containers, searched after the flat keys.
pub const IMAGE_CONTAINER_KEYS: &[&str] = &["images", "imageUrls", "image_urls", "art"];

/// Container sub-keys, largest rendition first.
pub const IMAGE_SIZE_PREFERENCE: &[&str] = &[
    "large", "full", "high", "highres", "default", "normal", "medium", "small", "thumb",
];

/// Whether a value counts as present for lookups and merging.
pub fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// First populated value among `keys`, in order.
pub fn first_populated<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_populated(value))
}

/// Render a scalar JSON value as text. Strings are returned unquoted.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// First populated value among `keys`, rendered as trimmed text.
pub fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> String {
    first_populated(fields, keys)
        .map(|value| value_text(value).trim().to_string())
        .unwrap_or_default()
}

/// First key among `keys` whose value renders to non-blank text.
fn first_non_blank(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter(|value| is_populated(value))
        .map(|value| value_text(value).trim().to_string())
        .find(|text| !text.is_empty())
}

/// The deduplication key of a raw record, or `None` for a fallback record.
///
/// The first populated identifier key is used verbatim: `" "` is a valid
/// identifier and `"OP01-001 "` is distinct from `"OP01-001"`.
pub fn card_identifier(record: &RawCardRecord) -> Option<String> {
    first_populated(record.fields(), IDENTIFIER_KEYS).map(value_text)
}

/// The printed card number, derived independently of the identifier.
pub fn card_number(record: &RawCardRecord) -> String {
    first_non_blank(record.fields(), NUMBER_KEYS).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawCardRecord {
        match value {
            Value::Object(map) => RawCardRecord::new(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_is_populated() {
        assert!(!is_populated(&json!(null)));
        assert!(!is_populated(&json!("")));
        assert!(!is_populated(&json!([])));
        assert!(!is_populated(&json!({})));
        assert!(is_populated(&json!(0)));
        assert!(is_populated(&json!(false)));
        assert!(is_populated(&json!(" ")));
    }

    #[test]
    fn test_identifier_priority() {
        let r = record(json!({"number": "OP01-001", "code": "C-1"}));
        assert_eq!(card_identifier(&r).as_deref(), Some("C-1"));
    }

    #[test]
    fn test_identifier_skips_empty_values() {
        let r = record(json!({"id": "", "code": null, "cardNumber": "ST01-012"}));
        assert_eq!(card_identifier(&r).as_deref(), Some("ST01-012"));
    }

    #[test]
    fn test_numeric_identifier_rendered_as_text() {
        let r = record(json!({"card_id": 1042}));
        assert_eq!(card_identifier(&r).as_deref(), Some("1042"));
    }

    #[test]
    fn test_identifier_is_not_trimmed() {
        let r = record(json!({"id": "OP01-001 "}));
        assert_eq!(card_identifier(&r).as_deref(), Some("OP01-001 "));
        let r = record(json!({"id": " ", "code": "C-1"}));
        assert_eq!(card_identifier(&r).as_deref(), Some(" "));
    }

    #[test]
    fn test_missing_identifier() {
        let r = record(json!({"name": "Nameless"}));
        assert!(card_identifier(&r).is_none());
    }

    #[test]
    fn test_number_prefers_number_field() {
        let r = record(json!({"id": "OP01-001_p1", "number": "OP01-001"}));
        assert_eq!(card_number(&r), "OP01-001");
        assert_eq!(card_identifier(&r).as_deref(), Some("OP01-001_p1"));
    }
}
