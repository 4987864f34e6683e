use optcg_game::ProjectError;
use optcg_import::ImportError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog build or write failed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Game document projection failed
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Logging or settings setup failed
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
