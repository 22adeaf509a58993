use std::io;

/// Why the guarded path declined to divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DivisionError {
    #[error("This would result in a divide by zero")]
    DivisionByZero,

    /// `i32::MIN / -1` and `i32::MIN % -1` do not fit in an `i32`.
    #[error("{numerator}{operator}{denominator} would overflow")]
    Overflow {
        numerator: i32,
        operator: char,
        denominator: i32,
    },
}

/// Failure to obtain a denominator from a [`Source`](crate::Source).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no input available")]
    EndOfInput,

    #[error("not a number: {input:?}")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
