//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {0}")]
    Config(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Domain(e) => match e {
                DomainError::InvalidToken { .. } | DomainError::DanglingValues { .. } => {
                    crate::exitcode::DATAERR
                }
                DomainError::Internal(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
