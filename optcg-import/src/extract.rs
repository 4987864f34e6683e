//! Locating card records inside arbitrarily shaped source documents.
//!
//! Accepted shapes, in order:
//! ```text
//! [ {card}, {card}, ... ]                       top-level array
//! { "cards" | "data" | "results" | "items": [...] }   first container key holding an array
//! { "id": ..., "name": ..., ... }                 a single card object
//! ```
//! Anything else (set metadata, manifests, scalars) yields no records.

use serde_json::{Map, Value};

use optcg_catalog::{RawCardRecord, SourceDocument};

use crate::language::classify_language;

const CONTAINER_KEYS: &[&str] = &["cards", "data", "results", "items"];

/// Result of extracting one document.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Admitted candidates, tagged with their provenance.
    pub records: Vec<RawCardRecord>,
    /// Candidates dropped by the language filter.
    pub rejected: usize,
}

/// Candidate objects of a document, before language filtering.
pub fn find_candidates(value: &Value) -> Vec<&Map<String, Value>> {
    match value {
        Value::Array(items) => objects(items),
        Value::Object(map) => {
            for key in CONTAINER_KEYS {
                if let Some(Value::Array(items)) = map.get(*key) {
                    return objects(items);
                }
            }
            if map.contains_key("id") && map.contains_key("name") {
                vec![map]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn objects(items: &[Value]) -> Vec<&Map<String, Value>> {
    items.iter().filter_map(Value::as_object).collect()
}

/// Extract admitted card records from a source document.
pub fn extract_document(document: &SourceDocument) -> Extraction {
    let mut extraction = Extraction::default();

    for candidate in find_candidates(&document.value) {
        let verdict = classify_language(candidate, &document.path);
        if !verdict.is_admitted() {
            log::debug!(
                "Dropping non-English candidate {:?} from {}",
                candidate.get("id"),
                document.path
            );
            extraction.rejected += 1;
            continue;
        }
        extraction
            .records
            .push(RawCardRecord::with_source(candidate.clone(), &document.path));
    }

    extraction
}

/// Like [`extract_document`], keeping only the admitted records.
pub fn extract_cards(document: &SourceDocument) -> Vec<RawCardRecord> {
    extract_document(document).records
}
