// pmx-convert - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for pmx-convert integration tests.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code, unused_imports)]

pub use pmx_convert::{
    Error, Pmc, PmcArray, PmcTuple, Pmt, ScalarType, pmc_to_pmt, pmt_to_pmc,
};
use pmx_pmc::{Complex32, Complex64};

/// Convert a `Pmc` to `Pmt` and back.
pub fn pmc_round_trip(value: &Pmc) -> Result<Pmc, Error> {
    pmt_to_pmc(&pmc_to_pmt(value)?)
}

/// Convert a `Pmt` to `Pmc` and back.
pub fn pmt_round_trip(value: &Pmt) -> Result<Pmt, Error> {
    pmc_to_pmt(&pmt_to_pmc(value)?)
}

/// A tuple of `arity` slots holding `0..arity` as `I32`.
pub fn counting_tuple(arity: usize) -> Vec<Pmc> {
    (0..arity as i32).map(Pmc::I32).collect()
}

/// An array of `len` elements of `scalar`, with distinct values per slot.
pub fn sample_array(scalar: ScalarType, len: usize) -> PmcArray {
    let ramp = (0..len).map(|i| i as u8);
    match scalar {
        ScalarType::U8 => PmcArray::new(ramp.collect::<Vec<u8>>()),
        ScalarType::I8 => PmcArray::new(ramp.map(|i| -(i as i8)).collect()),
        ScalarType::U16 => PmcArray::new(ramp.map(|i| u16::from(i) * 300).collect()),
        ScalarType::I16 => PmcArray::new(ramp.map(|i| -i16::from(i) * 300).collect()),
        ScalarType::U32 => PmcArray::new(ramp.map(|i| u32::from(i) << 24).collect()),
        ScalarType::I32 => PmcArray::new(ramp.map(|i| -(i32::from(i) << 24)).collect()),
        ScalarType::U64 => PmcArray::new(ramp.map(|i| u64::MAX - u64::from(i)).collect()),
        ScalarType::I64 => PmcArray::new(ramp.map(|i| i64::MIN + i64::from(i)).collect()),
        ScalarType::F32 => PmcArray::new(ramp.map(|i| f32::from(i) / 3.0).collect()),
        ScalarType::F64 => PmcArray::new(ramp.map(|i| f64::from(i) / 3.0).collect()),
        ScalarType::C32 => PmcArray::new(
            ramp.map(|i| Complex32::new(f32::from(i), -f32::from(i) / 7.0))
                .collect(),
        ),
        ScalarType::C64 => PmcArray::new(
            ramp.map(|i| Complex64::new(f64::from(i) / 7.0, -f64::from(i)))
                .collect(),
        ),
    }
}

/// Assert that a `Pmc` survives a round trip unchanged.
#[macro_export]
macro_rules! assert_pmc_round_trip {
    ($value:expr) => {{
        let value = $value;
        let back = $crate::common::pmc_round_trip(&value)
            .unwrap_or_else(|e| panic!("round trip of {} failed: {}", value, e));
        assert_eq!(back, value, "round trip of {}", value);
    }};
}
