//! Source discovery and loading.
//!
//! Every `*.json` file below the root is a source, except those under a
//! hidden path component. Paths are returned sorted so merge precedence does
//! not depend on filesystem iteration order.

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use optcg_catalog::SourceDocument;

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Relative, `/`-separated path used for ordering and provenance.
    pub relative: String,
    pub path: PathBuf,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Render `path` relative to `root` with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively find source files below `root`, sorted by relative path.
///
/// Hidden directories and files (any component starting with `.`) are skipped.
/// Unreadable directory entries are ignored.
pub fn discover_sources(root: &Path) -> Vec<SourceFile> {
    let mut sources: Vec<SourceFile> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_json(entry.path()))
        .map(|entry| SourceFile {
            relative: relative_path(root, entry.path()),
            path: entry.into_path(),
        })
        .collect();
    sources.sort();
    sources
}

/// Read and parse one source file. Returns `None` if the file cannot be read
/// or is not valid JSON.
pub fn load_document(source: &SourceFile) -> Option<SourceDocument> {
    let contents = match std::fs::read_to_string(&source.path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("Skipping unreadable source {}: {}", source.relative, e);
            return None;
        }
    };
    match serde_json::from_str::<Value>(contents.trim_start_matches('\u{feff}')) {
        Ok(value) => Some(SourceDocument::new(source.relative.clone(), value)),
        Err(e) => {
            log::debug!("Skipping malformed JSON in {}: {}", source.relative, e);
            None
        }
    }
}
