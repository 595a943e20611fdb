use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("not a valid amount or weight: {0:?}")]
    InvalidFormat(String),
    #[error("not a valid description: {0:?}")]
    InvalidDescription(String),
    #[error("a transaction needs at least one expense")]
    NoExpenses,
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}
