//! CLI errors and their exit codes.

use thiserror::Error;

use crate::exits;
use classpass::pass::InvalidRequest;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("{0}")]
    Invalid(#[from] InvalidRequest),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Aborted")]
    Aborted,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            // --help and --version arrive as clap errors on stdout
            CliError::Usage(e) if !e.use_stderr() => exits::SUCCESS,
            CliError::Usage(_) => exits::USAGE,
            CliError::Invalid(_) => exits::INVALID_REQUEST,
            CliError::Io(_) | CliError::Clipboard(_) => exits::IO_FAILURE,
            CliError::Aborted => exits::SUCCESS,
        }
    }
}
