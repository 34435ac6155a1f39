//! Errors raised by calculator operations.

use thiserror::Error;

/// Errors that can occur while handling calculator input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid digit {0}, expected 0-9")]
    InvalidDigit(u8),

    #[error("Invalid digit character '{0}'")]
    InvalidDigitChar(char),

    #[error("History entry {index} does not exist (history holds {len})")]
    HistoryIndexOutOfRange { index: usize, len: usize },
}

/// Result alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
