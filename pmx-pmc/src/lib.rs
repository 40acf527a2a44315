// pmx-pmc - Dynamic container values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # pmx-pmc
//!
//! A dynamically typed container: one of a closed set of scalar and
//! aggregate kinds, including fixed-width integers, floats and complex
//! numbers, pairs, tuples of arity 0 to 10, lists, typed numeric arrays,
//! ordered maps and sets, and an opaque escape hatch.
//!
//! ```rust
//! use pmx_pmc::{Pmc, PmcTuple};
//!
//! let header = PmcTuple::from_array([Pmc::from("burst"), Pmc::from(42u32)]);
//! let msg = Pmc::pair(Pmc::from(header), Pmc::array(vec![1u8, 2, 3]));
//! assert_eq!(msg.to_string(), "<(\"burst\", 42), u8[1, 2, 3]>");
//! ```

pub mod array;
pub mod error;
pub mod tuple;
pub mod value;

pub use array::{ArrayElement, PmcArray, ScalarType};
pub use error::{AritySpec, Error, Result};
pub use num_complex::{Complex32, Complex64};
pub use tuple::{MAX_TUPLE_ARITY, PmcTuple};
pub use value::{Pmc, PmcAny, PmcPair};
