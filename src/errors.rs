use std::io;

use rustyline::error::ReadlineError;
use spend_config::ConfigError;
use spend_core::CoreError;
use thiserror::Error;

/// Unified error type for engine, storage, and configuration failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Fatal errors that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Dashboard(err.into())
    }
}
