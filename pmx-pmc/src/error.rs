// pmx-pmc - Error types for Pmc construction and access
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for `Pmc` construction and typed access.

use std::fmt;

/// Result type for `Pmc` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by `Pmc` constructors and accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tuple built or read with an unsupported arity
    ArityError { expected: AritySpec, got: usize },
    /// The value is not of the kind the operation needs
    WrongType {
        expected: &'static str,
        got: &'static str,
    },
}

/// Specification for expected arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    Range(usize, usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArityError { expected, got } => {
                write!(f, "Wrong tuple arity: expected {}, got {}", expected, got)
            }
            Error::WrongType { expected, got } => {
                write!(f, "Type error: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an arity error for exact arity.
    pub fn arity(expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Exact(expected),
            got,
        }
    }

    /// Create an arity error for an inclusive range.
    pub fn arity_range(min: usize, max: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Range(min, max),
            got,
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::WrongType { expected, got }
    }
}
