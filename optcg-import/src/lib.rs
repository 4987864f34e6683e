//! Ingest card source files into the canonical catalog.
//!
//! This crate owns all ETL logic: discovering source files, locating card
//! records inside them, filtering by language, merging duplicates across
//! sources, and normalizing the result via `optcg-catalog`.

pub mod error;
pub mod extract;
pub mod language;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod sources;

pub use error::ImportError;
pub use extract::{Extraction, extract_cards, extract_document, find_candidates};
pub use language::{LanguageVerdict, classify_language, is_probably_english};
pub use merge::{CardMerger, MergeStats, MergedRecords, merge_fields};
pub use pipeline::{
    CatalogBuild, ImportOptions, ImportStats, assemble_catalog, build_catalog,
    build_catalog_from_documents, write_catalog,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress, is_milestone};
pub use sources::{SourceFile, discover_sources, load_document, relative_path};
