// pmx-convert - Bridge between Pmc containers and Pmt values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # pmx-convert
//!
//! Bidirectional, recursive conversion between [`Pmc`] containers and
//! [`Pmt`] values.
//!
//! ## Quick Start
//!
//! ```rust
//! use pmx_convert::{Pmc, Pmt, ToPmc, ToPmt};
//!
//! let pair = Pmc::pair(Pmc::Bool(true), Pmc::from("hello"));
//! let pmt = pair.to_pmt().unwrap();
//! assert_eq!(pmt.to_string(), "(#t . hello)");
//! assert_eq!(pmt.to_pmc().unwrap(), pair);
//! ```
//!
//! ## Conversion Table
//!
//! | `Pmc` | `Pmt` | back to `Pmc` |
//! |-------|-------|---------------|
//! | `Null` | `Null` | `Null` |
//! | `Bool` | `Bool` | `Bool` |
//! | `String` | `Symbol` | `String` |
//! | `I8`, `I16`, `I32`, `U8`, `U16`, `U32` | `Integer` | `I32` (truncating) |
//! | `I64`, `U64` | `Uint64` | `U64` |
//! | `F32`, `F64` | `Real` | `F64` |
//! | `C32`, `C64` | `Complex` | `C64` |
//! | `Pair` | `Pair` (cons) | `Pair` |
//! | `Tuple` (arity 0 to 10) | `Tuple` | `Tuple` |
//! | `List` | `Vector` | `List` |
//! | `Array` of `T` | uniform vector of `T` | `Array` of `T` |
//! | `Dict` | `Dict` | `Dict` |
//! | `Set` | proper list | not supported ([`pmt_list_to_pmc_set`]) |
//! | `Any` carrying a `Pmt` | that `Pmt` | |
//! | other `Any` | `Any` carrying the `Pmc` | the original `Pmc` |
//! | | `Nil`, foreign `Any` | `Any` carrying the `Pmt` |
//!
//! The narrowing in the integer rows is deliberate: 64-bit kinds travel as
//! `Uint64`, everything narrower as `Integer`, and `Integer` always comes
//! back as `I32`.
//!
//! ## Opaque Values
//!
//! A value with no counterpart is wrapped whole in the other side's `Any`
//! kind. Converting the wrapper back unwraps it, so the original payload
//! returns by identity and is never wrapped twice.
//!
//! ## Nesting Limit
//!
//! Conversion depth is bounded per thread (see [`set_max_convert_depth`]).
//! A vector that contains itself fails with [`Error::DepthExceeded`]
//! instead of overflowing the stack. The stack grows on demand while
//! converting, so the limit holds on a default-sized thread.

mod depth;
mod error;
mod kind;
mod to_pmc;
mod to_pmt;

pub use depth::{
    DEFAULT_MAX_CONVERT_DEPTH, get_convert_depth, get_max_convert_depth, set_max_convert_depth,
};
pub use error::{AritySpec, Error, Result};
pub use kind::{Classify, Kind, element_type_of, scalar_type_of};
pub use to_pmc::{ToPmc, pmt_list_to_pmc_set, pmt_to_pmc};
pub use to_pmt::{ToPmt, pmc_to_pmt};

// Re-export both value universes for convenience
pub use pmx_pmc::{Pmc, PmcAny, PmcArray, PmcTuple, ScalarType};
pub use pmx_pmt::{ElementType, Pmt, PmtAny, PmtDict, UniformVector};
