//! Error types.
//!
//! The `Display` text of every variant is the message shown to the user.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejection reasons produced while preparing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("Unrecognized statement: '{0}'.")]
    UnrecognizedStatement(String),

    /// An insert missing one of its fields, or with an unparsable id.
    #[error("Unrecognized statement: '{0}'.")]
    MalformedInsert(String),

    #[error("Id cannot be negative.")]
    NegativeId,

    #[error("String is too long.")]
    FieldTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
