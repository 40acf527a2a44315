// pmx-pmt - Symbolic message values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # pmx-pmt
//!
//! Lisp-style message values: symbols, numbers, pairs and lists, tuples,
//! mutable vectors, uniform numeric vectors, persistent dictionaries and
//! opaque payloads.
//!
//! ```rust
//! use pmx_pmt::Pmt;
//!
//! let meta = Pmt::make_dict()
//!     .dict_add(Pmt::symbol("freq"), Pmt::from_double(2.4e9))
//!     .unwrap();
//! let msg = Pmt::cons(meta, Pmt::init_uniform(&[1i16, 2, 3]));
//! assert_eq!(msg.to_string(), "(((freq . 2400000000)) . #[1 2 3])");
//! ```

pub mod dict;
pub mod error;
pub mod shared;
pub mod symbol;
pub mod uniform;
pub mod value;

pub use dict::PmtDict;
pub use error::{Error, Result};
pub use num_complex::{Complex32, Complex64};
pub use shared::SharedVec;
pub use symbol::Symbol;
pub use uniform::{ElementType, UniformElement, UniformVector};
pub use value::{Pmt, PmtAny, PmtPair};
