// error.rs

use thiserror::Error;

/// Everything that can go wrong inside the calculator. Lower layers return
/// these unchanged via `?`; the REPL loop is the only place they are caught
/// and rendered. The `Display` text is exactly what the user sees after
/// `"Error: "`.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown operation: {0}")]
    OperationNotFound(String),

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("{0}")]
    InvalidArithmetic(String),

    /// Bad environment configuration. Fatal at startup, before the loop.
    #[error("{0}")]
    Config(String),

    /// History persistence failure, read or write side.
    #[error("{0}")]
    HistoryIo(String),
}
