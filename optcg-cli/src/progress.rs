//! Terminal progress display for the catalog import.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use optcg_import::ImportProgress;

/// Progress bar over the source files. Hidden entirely in quiet mode.
pub(crate) struct CliImportProgress {
    bar: ProgressBar,
}

impl CliImportProgress {
    pub(crate) fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        bar.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

impl ImportProgress for CliImportProgress {
    fn on_file(&self, current: usize, total: usize, path: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
        self.bar.set_message(path.to_string());
    }

    fn on_phase(&self, message: &str) {
        self.bar.suspend(|| {
            log::info!("{}", message.if_supports_color(Stderr, |t| t.bold()));
        });
    }

    fn on_complete(&self, message: &str) {
        self.bar.finish_and_clear();
        log::info!("{}", message);
    }
}
