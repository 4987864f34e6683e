//! Value coercion helpers used by normalization.
//!
//! None of these fail: every malformed or missing input maps to a documented
//! empty value.

use serde_json::{Map, Value};

use crate::fields::{IMAGE_CONTAINER_KEYS, IMAGE_KEYS, IMAGE_SIZE_PREFERENCE};

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a category onto the known vocabulary.
///
/// Matching ignores case, `_`/`-` separators, and extra whitespace.
/// Unrecognized values are returned trimmed with their original casing.
///
/// ```
/// use optcg_catalog::coerce::canonical_category;
///
/// assert_eq!(canonical_category("LEADER"), "Leader");
/// assert_eq!(canonical_category("don!!"), "DON!!");
/// assert_eq!(canonical_category("  Token "), "Token");
/// ```
pub fn canonical_category(raw: &str) -> String {
    let trimmed = raw.trim();
    let key = collapse_whitespace(&trimmed.to_lowercase().replace(['_', '-'], " "));
    match key.as_str() {
        "leader" => "Leader".to_string(),
        "character" => "Character".to_string(),
        "event" => "Event".to_string(),
        "stage" => "Stage".to_string(),
        "don" | "don!!" => "DON!!".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Normalize a multi-valued field (colors, attributes, types) into a list.
///
/// Arrays keep their non-blank string (or numeric) items in order. A single
/// string is split on `/` when present, else on `,`, else kept whole.
pub fn split_multi(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => {
            let parts: Vec<&str> = if s.contains('/') {
                s.split('/').collect()
            } else if s.contains(',') {
                s.split(',').collect()
            } else {
                vec![s.as_str()]
            };
            parts
                .into_iter()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Best-effort integer for a numeric field. A leading `+` is ignored;
/// anything else non-numeric (including `-` and `""`) yields `None`, as do
/// floats outside the `i64` range.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            let digits = s.strip_prefix('+').unwrap_or(s);
            digits.parse::<i64>().ok()
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Text form of a numeric field. `-`, `None`, and blank collapse to `""`.
pub fn numeric_text(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => crate::fields::value_text(other).trim().to_string(),
    };
    match text.as_str() {
        "-" | "None" => String::new(),
        _ => text,
    }
}

/// Resolve the card image URL.
///
/// Flat keys are searched first, then nested containers using the size
/// preference order. Returns `""` when no image is found anywhere.
pub fn resolve_image(fields: &Map<String, Value>) -> String {
    IMAGE_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| value.as_str().and_then(non_blank))
        .or_else(|| {
            IMAGE_CONTAINER_KEYS
                .iter()
                .filter_map(|key| fields.get(*key))
                .find_map(image_from_container)
        })
        .unwrap_or_default()
}

fn image_from_container(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Object(map) => IMAGE_SIZE_PREFERENCE
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|v| v.as_str().and_then(non_blank))
            .or_else(|| map.values().find_map(|v| v.as_str().and_then(non_blank))),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().and_then(non_blank)),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
