//! JSON output for generated artifacts.
//!
//! Documents are pretty-printed with two-space indentation, non-ASCII text is
//! written literally, and every file ends with a newline.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonWriteError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render `value` as pretty JSON with a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Serialize `value` and write it to `path`, creating parent directories.
///
/// The document is written to a sibling temp file first and renamed into
/// place, so readers never observe a partial file.
pub fn write_json_file<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
) -> Result<(), JsonWriteError> {
    let text = to_pretty_json(value)?;
    let io_err = |source| JsonWriteError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    std::fs::write(&tmp, text).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;

    Ok(())
}
