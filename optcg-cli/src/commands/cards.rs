use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use optcg_import::{ImportOptions, ImportProgress, LogProgress, build_catalog, write_catalog};

use crate::error::CliError;
use crate::progress::CliImportProgress;
use crate::settings::Settings;

/// Merge every card source under `source_dir` into the catalog at `output`.
///
/// Nothing is written when the build fails. The summary line is printed even
/// in quiet mode.
pub(crate) fn run_cards(
    settings: &Settings,
    source_dir: PathBuf,
    output: PathBuf,
    card_back: Option<String>,
    quiet: bool,
    to_logfile: bool,
) -> Result<(), CliError> {
    let options = ImportOptions {
        card_back: settings.card_back(card_back),
    };
    // A log file gets milestone lines instead of a terminal bar.
    let progress: Box<dyn ImportProgress> = if to_logfile {
        Box::new(LogProgress)
    } else {
        Box::new(CliImportProgress::new(quiet))
    };
    let build = build_catalog(&source_dir, &options, Some(progress.as_ref()))?;

    let stats = &build.stats;
    log::debug!(
        "{} files ({} skipped), {} candidates, {} non-English, \
         {} records merged into {} ids, {} fallback",
        stats.files_seen,
        stats.files_skipped,
        stats.candidates,
        stats.rejected_language,
        stats.merge.merged,
        stats.merge.unique_ids,
        stats.merge.fallback,
    );

    write_catalog(&build.catalog, &output)?;

    println!(
        "Merged {} cards into {}",
        build.catalog.len().if_supports_color(Stdout, |t| t.bold()),
        output.display(),
    );
    Ok(())
}
