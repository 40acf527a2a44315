// pmx-convert - Error types for conversion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for conversion between `Pmc` and `Pmt`.

use std::fmt;

pub use pmx_pmc::AritySpec;

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion failures.
///
/// An unrecognized value is never an error: it is wrapped opaquely. These
/// variants cover values that cannot be converted at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A conversion that is deliberately not provided
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },
    /// A value of a known kind whose contents cannot be read
    MalformedValue { kind: &'static str, message: String },
    /// Tuple arity outside the supported range, or not the one requested
    ArityError { expected: AritySpec, got: usize },
    /// Wrong kind for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Nesting deeper than the configured limit (see `set_max_convert_depth`)
    DepthExceeded { max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedConversion { from, to } => {
                write!(f, "Unsupported conversion from {} to {}", from, to)
            }
            Error::MalformedValue { kind, message } => {
                write!(f, "Malformed {}: {}", kind, message)
            }
            Error::ArityError { expected, got } => {
                write!(f, "Wrong tuple arity: expected {}, got {}", expected, got)
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::DepthExceeded { max } => {
                write!(f, "Conversion exceeded maximum nesting depth ({})", max)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an unsupported-conversion error.
    pub fn unsupported(from: &'static str, to: &'static str) -> Self {
        Error::UnsupportedConversion { from, to }
    }

    /// Create a malformed-value error.
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Error::MalformedValue {
            kind,
            message: message.into(),
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
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }
}

impl From<pmx_pmt::Error> for Error {
    fn from(err: pmx_pmt::Error) -> Self {
        match err {
            pmx_pmt::Error::WrongType {
                expected,
                got,
                context,
            } => Error::TypeError {
                expected,
                got,
                context,
            },
            pmx_pmt::Error::IndexOutOfBounds { .. } => Error::malformed("sequence", err.to_string()),
            pmx_pmt::Error::Poisoned { kind } => Error::malformed(kind, err.to_string()),
        }
    }
}

impl From<pmx_pmc::Error> for Error {
    fn from(err: pmx_pmc::Error) -> Self {
        match err {
            pmx_pmc::Error::ArityError { expected, got } => Error::ArityError { expected, got },
            pmx_pmc::Error::WrongType { expected, got } => Error::type_error(expected, got),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::unsupported("list", "set").to_string(),
            "Unsupported conversion from list to set"
        );
        assert_eq!(
            Error::arity_range(0, 10, 11).to_string(),
            "Wrong tuple arity: expected 0 to 10, got 11"
        );
        assert_eq!(
            Error::DepthExceeded { max: 8 }.to_string(),
            "Conversion exceeded maximum nesting depth (8)"
        );
        assert_eq!(
            Error::type_error_in("pmt_list_to_pmc_set", "list", "integer").to_string(),
            "pmt_list_to_pmc_set: expected list, got integer"
        );
    }

    #[test]
    fn test_from_pmt_error() {
        let poisoned: Error = pmx_pmt::Error::Poisoned { kind: "vector" }.into();
        assert_eq!(
            poisoned,
            Error::malformed("vector", "Storage of vector is poisoned by a panicked writer")
        );
        let wrong: Error = pmx_pmt::Error::wrong_type("pair", "nil").into();
        assert_eq!(wrong, Error::type_error("pair", "nil"));
    }

    #[test]
    fn test_from_pmc_error() {
        let arity: Error = pmx_pmc::Error::arity_range(0, 10, 12).into();
        assert_eq!(arity, Error::arity_range(0, 10, 12));
    }
}
