// pmx-pmt - Error types for Pmt operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for `Pmt` accessors and mutators.

use std::fmt;

/// Result type for `Pmt` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by `Pmt` accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is not of the kind the operation needs
    WrongType {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Index out of bounds for a tuple, vector, uniform vector or list
    IndexOutOfBounds { index: usize, length: usize },
    /// Backing storage of a mutable vector is unusable (a writer panicked)
    Poisoned { kind: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WrongType {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Wrong type: expected {}, got {}", expected, got)
                }
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for collection of length {}",
                    index, length
                )
            }
            Error::Poisoned { kind } => {
                write!(f, "Storage of {} is poisoned by a panicked writer", kind)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a wrong-type error.
    pub fn wrong_type(expected: &'static str, got: &'static str) -> Self {
        Error::WrongType {
            expected,
            got,
            context: None,
        }
    }

    /// Create a wrong-type error naming the failing operation.
    pub fn wrong_type_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::WrongType {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an out-of-bounds error.
    pub fn out_of_bounds(index: usize, length: usize) -> Self {
        Error::IndexOutOfBounds { index, length }
    }
}
