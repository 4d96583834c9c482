//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised while turning a textual description into a tree.
/// The tree algorithms themselves never fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid token at position {position}: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("{count} value(s) have no parent slot in the level-order description")]
    DanglingValues { count: usize },

    #[error("internal tree operation failed: {0}")]
    Internal(String),
}

/// Result type for tree construction.
pub type TreeResult<T> = Result<T, DomainError>;
