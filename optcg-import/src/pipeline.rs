//! The catalog build: discover → extract → merge → normalize.
//!
//! Merging completes over every source before any record is normalized, so a
//! field contributed by a late file is visible to normalization regardless of
//! which file first introduced the card.

use std::collections::btree_map::Entry;
use std::path::Path;

use optcg_catalog::{
    CanonicalCard, Catalog, DEFAULT_CARD_BACK, SourceDocument, normalize_card, write_json_file,
};

use crate::error::ImportError;
use crate::extract::extract_document;
use crate::merge::{CardMerger, MergeStats, MergedRecords};
use crate::progress::ImportProgress;
use crate::sources::{discover_sources, load_document};

/// Options for a catalog build.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Image placed on every card's back face.
    pub card_back: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            card_back: DEFAULT_CARD_BACK.to_string(),
        }
    }
}

/// Statistics from a catalog build.
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub files_seen: u64,
    /// Files that could not be read or parsed.
    pub files_skipped: u64,
    /// Candidate records found, before language filtering.
    pub candidates: u64,
    pub rejected_language: u64,
    pub merge: MergeStats,
    /// Cards in the finished catalog.
    pub cards: u64,
}

/// A finished catalog and how it was built.
#[derive(Debug, Default)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub stats: ImportStats,
}

/// Build the catalog from every source file below `root`.
///
/// Only a missing or non-directory root is an error; unreadable or malformed
/// files are skipped and counted in [`ImportStats::files_skipped`].
pub fn build_catalog(
    root: &Path,
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<CatalogBuild, ImportError> {
    if !root.exists() {
        return Err(ImportError::SourceNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(ImportError::NotADirectory(root.display().to_string()));
    }

    let sources = discover_sources(root);
    if let Some(p) = progress {
        p.on_phase(&format!(
            "Reading {} source files from {}",
            sources.len(),
            root.display()
        ));
    }

    let mut stats = ImportStats::default();
    let mut merger = CardMerger::new();

    for (i, source) in sources.iter().enumerate() {
        stats.files_seen += 1;
        match load_document(source) {
            Some(document) => ingest_document(&document, &mut merger, &mut stats),
            None => stats.files_skipped += 1,
        }
        if let Some(p) = progress {
            p.on_file(i + 1, sources.len(), &source.relative);
        }
    }

    if let Some(p) = progress {
        p.on_phase(&format!("Normalizing {} records", merger.len()));
    }

    let build = finish_build(merger, options, stats);

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Built {} cards ({} merged duplicates, {} without id, {} files skipped)",
            build.stats.cards,
            build.stats.merge.merged,
            build.stats.merge.fallback,
            build.stats.files_skipped,
        ));
    }

    Ok(build)
}

/// Build the catalog from already-parsed documents, in the order given.
pub fn build_catalog_from_documents(
    documents: impl IntoIterator<Item = SourceDocument>,
    options: &ImportOptions,
) -> CatalogBuild {
    let mut stats = ImportStats::default();
    let mut merger = CardMerger::new();
    for document in documents {
        stats.files_seen += 1;
        ingest_document(&document, &mut merger, &mut stats);
    }
    finish_build(merger, options, stats)
}

fn ingest_document(document: &SourceDocument, merger: &mut CardMerger, stats: &mut ImportStats) {
    let extraction = extract_document(document);
    stats.candidates += (extraction.records.len() + extraction.rejected) as u64;
    stats.rejected_language += extraction.rejected as u64;
    merger.add_all(extraction.records);
}

fn finish_build(
    merger: CardMerger,
    options: &ImportOptions,
    mut stats: ImportStats,
) -> CatalogBuild {
    let merged = merger.finish();
    stats.merge = merged.stats.clone();
    let catalog = assemble_catalog(merged, &options.card_back);
    stats.cards = catalog.len() as u64;
    CatalogBuild { catalog, stats }
}

/// Normalize merged records into the catalog.
///
/// Fallback records have no identifier; each is keyed `<source_file>#<n>`,
/// where `n` is its 1-based position among the fallback records.
pub fn assemble_catalog(merged: MergedRecords, card_back: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (identifier, record) in merged.identified {
        let mut card = normalize_card(&record, card_back);
        if card.id.is_empty() {
            card.id = identifier;
        }
        insert_card(&mut catalog, card);
    }

    for (n, record) in merged.fallback.into_iter().enumerate() {
        let mut card = normalize_card(&record, card_back);
        card.id = format!("{}#{}", record.source_file().unwrap_or("unknown"), n + 1);
        insert_card(&mut catalog, card);
    }

    catalog
}

fn insert_card(catalog: &mut Catalog, card: CanonicalCard) {
    match catalog.entry(card.id.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(card);
        }
        Entry::Occupied(_) => {
            log::warn!(
                "Duplicate card id {} after normalization; keeping the first",
                card.id
            );
        }
    }
}

/// Write the catalog as a JSON object keyed by card id.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), ImportError> {
    write_json_file(catalog, path)?;
    Ok(())
}
