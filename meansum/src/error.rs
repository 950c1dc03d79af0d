use thiserror::Error;

/// Errors produced while aggregating a number list.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeanSumError {
    /// The mean of an empty list is undefined.
    #[error("Invalid input: numbers must not be empty")]
    EmptyInput,

    #[error("Invalid input: element at index {index} is not a finite number")]
    NonFinite { index: usize },

    /// Finite inputs whose sum does not fit in an f64.
    #[error("Invalid input: sum overflows the range of a 64-bit float")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, MeanSumError>;
