//! Logger setup for the CLI.
//!
//! Default level is `info`; `--quiet` lowers it to `warn` and `--verbose`
//! raises it to `debug` with timestamps. `RUST_LOG` still overrides both.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

use crate::error::CliError;

pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }

    if let Some(path) = logfile {
        let file = File::create(path).map_err(|e| {
            CliError::config(format!("cannot create log file {}: {}", path.display(), e))
        })?;
        // Messages may carry owo-colors styling decided against stdout.
        builder
            .target(Target::Pipe(Box::new(strip_ansi_escapes::Writer::new(file))))
            .write_style(WriteStyle::Never);
    }

    builder
        .try_init()
        .map_err(|e| CliError::config(e.to_string()))
}
