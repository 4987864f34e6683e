//! Multi-source merge of raw card records.
//!
//! Records sharing an identifier describe the same card. Fields are merged
//! last-writer-wins per field, except that an empty value never replaces a
//! populated one. Records without an identifier are kept individually.

use std::collections::HashMap;

use optcg_catalog::{RawCardRecord, card_identifier, is_populated};

/// Counters for a merge pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub records_seen: u64,
    pub unique_ids: u64,
    pub merged: u64,
    pub fallback: u64,
}

/// Output of a merge pass: one record per identifier plus the fallback list.
#[derive(Debug, Default)]
pub struct MergedRecords {
    /// Identified records in first-seen order, with their identifiers.
    pub identified: Vec<(String, RawCardRecord)>,
    /// Records without an identifier, in arrival order.
    pub fallback: Vec<RawCardRecord>,
    pub stats: MergeStats,
}

/// Accumulates raw records in discovery order.
///
/// Order matters only when two sources disagree on a populated field; the
/// later record wins that field.
#[derive(Debug, Default)]
pub struct CardMerger {
    index: HashMap<String, usize>,
    records: Vec<(String, RawCardRecord)>,
    fallback: Vec<RawCardRecord>,
    stats: MergeStats,
}

impl CardMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record, merging it into an earlier record with the same identifier.
    pub fn add(&mut self, record: RawCardRecord) {
        self.stats.records_seen += 1;

        let Some(identifier) = card_identifier(&record) else {
            self.stats.fallback += 1;
            self.fallback.push(record);
            return;
        };

        match self.index.get(&identifier) {
            Some(&slot) => {
                merge_fields(&mut self.records[slot].1, record);
                self.stats.merged += 1;
            }
            None => {
                self.index.insert(identifier.clone(), self.records.len());
                self.records.push((identifier, record));
                self.stats.unique_ids += 1;
            }
        }
    }

    pub fn add_all(&mut self, records: impl IntoIterator<Item = RawCardRecord>) {
        for record in records {
            self.add(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len() + self.fallback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    pub fn finish(self) -> MergedRecords {
        MergedRecords {
            identified: self.records,
            fallback: self.fallback,
            stats: self.stats,
        }
    }
}

/// Overwrite fields of `stored` with every populated field of `incoming`.
///
/// Empty values (null, `""`, `[]`, `{}`) are ignored and fields absent from
/// `incoming` are left untouched.
pub fn merge_fields(stored: &mut RawCardRecord, incoming: RawCardRecord) {
    for (key, value) in incoming.into_fields() {
        if is_populated(&value) {
            stored.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn record(value: Value) -> RawCardRecord {
        RawCardRecord::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_merge_fields_keeps_populated() {
        let mut stored = record(json!({"id": "A", "rarity": "SR", "power": "5000"}));
        merge_fields(
            &mut stored,
            record(json!({"id": "A", "rarity": "", "power": "6000", "colors": []})),
        );
        assert_eq!(stored.get("rarity"), Some(&json!("SR")));
        assert_eq!(stored.get("power"), Some(&json!("6000")));
        assert!(stored.get("colors").is_none());
    }

    #[test]
    fn test_stats() {
        let mut merger = CardMerger::new();
        merger.add(record(json!({"id": "A"})));
        merger.add(record(json!({"code": "A"})));
        merger.add(record(json!({"id": "B"})));
        merger.add(record(json!({"name": "no id"})));
        assert_eq!(merger.len(), 3);

        let merged = merger.finish();
        assert_eq!(
            merged.stats,
            MergeStats {
                records_seen: 4,
                unique_ids: 2,
                merged: 1,
                fallback: 1,
            }
        );
        let ids: Vec<&str> = merged.identified.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
