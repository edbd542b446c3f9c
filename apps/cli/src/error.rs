//! # CLI Error Type
//!
//! What can end an interactive session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu                               │
//! │                                                                         │
//! │  ValidationError ──► printed in red, prompt repeats (never reaches here)│
//! │  DbError::NotFound ─► printed in red, back to the menu                  │
//! │  Input closed ──────► CliError::InputClosed, session ends quietly       │
//! │  Anything else ─────► CliError, printed by main, exit code 1           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use stockroom_db::DbError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storage failure other than a reported "not found".
    #[error(transparent)]
    Db(#[from] DbError),

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Invalid environment configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
