//! Language admission for candidate records.
//!
//! Sources mix English and localized card dumps. A candidate is admitted when
//! its own language fields or its file path point at English, rejected when
//! its language fields name a known foreign locale, and admitted when there is
//! no signal at all.

use serde_json::{Map, Value};

use optcg_catalog::fields::{is_populated, value_text};

const LANGUAGE_KEYS: &[&str] = &["language", "lang", "locale"];
const ENGLISH_MARKERS: &[&str] = &["en", "english"];
const FOREIGN_MARKERS: &[&str] = &["jp", "ja", "fr", "it", "de", "es"];
const ENGLISH_PATH_MARKERS: &[&str] = &["english", "/en/", "_en", "-en"];

/// Why a candidate was admitted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVerdict {
    /// A language field names English.
    FieldEnglish,
    /// A language field names a known non-English locale.
    FieldForeign,
    /// The source path carries an English marker.
    PathEnglish,
    /// Nothing indicates a language either way.
    NoSignal,
}

impl LanguageVerdict {
    pub fn is_admitted(self) -> bool {
        !matches!(self, LanguageVerdict::FieldForeign)
    }
}

/// Classify a candidate by its language fields, then by its source path.
///
/// Matching is by substring, so a field value like `"en-US"` reads as English
/// and `"ja_JP"` as foreign. Candidates without any signal are admitted.
pub fn classify_language(fields: &Map<String, Value>, source_path: &str) -> LanguageVerdict {
    let lang_value = LANGUAGE_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .filter(|value| is_populated(value))
        .map(|value| value_text(value).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if !lang_value.is_empty() {
        if ENGLISH_MARKERS.iter().any(|m| lang_value.contains(m)) {
            return LanguageVerdict::FieldEnglish;
        }
        if FOREIGN_MARKERS.iter().any(|m| lang_value.contains(m)) {
            return LanguageVerdict::FieldForeign;
        }
    }

    let path_lower = source_path.to_lowercase();
    if ENGLISH_PATH_MARKERS.iter().any(|m| path_lower.contains(m)) {
        return LanguageVerdict::PathEnglish;
    }

    LanguageVerdict::NoSignal
}

/// Whether a candidate should enter the pipeline.
pub fn is_probably_english(fields: &Map<String, Value>, source_path: &str) -> bool {
    classify_language(fields, source_path).is_admitted()
}
