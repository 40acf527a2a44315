// pmx-convert - Pmt to Pmc conversion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion from `Pmt` values to `Pmc` containers.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::{debug, trace};
use pmx_pmc::{MAX_TUPLE_ARITY, Pmc, PmcAny, PmcArray, PmcTuple};
use pmx_pmt::{Pmt, UniformVector};

use crate::depth::{ConvertDepthGuard, with_stack};
use crate::error::{Error, Result};
use crate::kind::Classify;

/// Convert a `Pmt` into a `Pmc`, recursing into every compound kind.
///
/// `Pmt::Integer` always becomes `Pmc::I32`, truncating values outside the
/// `i32` range. Mutable vectors are read as a snapshot taken at the moment
/// they are reached; the caller must ensure no other thread writes to them
/// during the call.
///
/// An `Any` carrying a `Pmc` is unwrapped. Anything without a `Pmc`
/// counterpart, including the empty list, is wrapped whole as `Pmc::Any`.
/// The wrapper takes its identity from the `Pmt` payload, so converting the
/// same value twice gives equal results.
///
/// # Errors
///
/// - [`Error::ArityError`] for a tuple longer than [`MAX_TUPLE_ARITY`]
/// - [`Error::MalformedValue`] when a vector's storage is poisoned
/// - [`Error::DepthExceeded`] when nesting passes the configured limit,
///   which includes a vector that contains itself
pub fn pmt_to_pmc(value: &Pmt) -> Result<Pmc> {
    with_stack(|| convert(value))
}

fn convert(value: &Pmt) -> Result<Pmc> {
    let _guard = ConvertDepthGuard::new()?;
    trace!("pmt_to_pmc: {}", value.classify());

    let converted = match value {
        Pmt::Null => Pmc::Null,
        Pmt::Bool(b) => Pmc::Bool(*b),
        Pmt::Symbol(sym) => Pmc::String(sym.as_arc_str().clone()),

        Pmt::Integer(n) => {
            let narrowed = *n as i32;
            if i64::from(narrowed) != *n {
                debug!("pmt_to_pmc: integer {} truncated to {}", n, narrowed);
            }
            Pmc::I32(narrowed)
        }
        Pmt::Uint64(n) => Pmc::U64(*n),
        Pmt::Real(x) => Pmc::F64(*x),
        Pmt::Complex(z) => Pmc::C64(*z),

        Pmt::Pair(pair) => Pmc::pair(pmt_to_pmc(&pair.car)?, pmt_to_pmc(&pair.cdr)?),

        Pmt::Tuple(items) => {
            if items.len() > MAX_TUPLE_ARITY {
                return Err(Error::arity_range(0, MAX_TUPLE_ARITY, items.len()));
            }
            Pmc::Tuple(PmcTuple::new(convert_all(items)?)?)
        }

        Pmt::Vector(cells) => {
            let snapshot = cells.snapshot()?;
            Pmc::List(convert_all(&snapshot)?)
        }

        Pmt::Uniform(uniform) => Pmc::Array(uniform_to_array(uniform)?),

        Pmt::Dict(dict) => {
            let mut map = BTreeMap::new();
            for (k, v) in dict.iter() {
                let key = pmt_to_pmc(k)?;
                let val = pmt_to_pmc(v)?;
                if let Some(previous) = map.insert(key, val) {
                    debug!("pmt_to_pmc: dict key {} coalesced, dropped {}", k, previous);
                }
            }
            Pmc::Dict(map)
        }

        Pmt::Any(any) => match any.downcast_ref::<Pmc>() {
            Some(inner) => inner.clone(),
            None => {
                debug!("pmt_to_pmc: wrapping opaque payload as any");
                Pmc::Any(PmcAny::anchored(value.clone(), any.identity().clone()))
            }
        },

        Pmt::Nil => Pmc::Any(empty_list()),
    };
    Ok(converted)
}

/// The one `Pmc` wrapper for the empty list.
fn empty_list() -> PmcAny {
    static EMPTY_LIST: OnceLock<PmcAny> = OnceLock::new();
    EMPTY_LIST.get_or_init(|| PmcAny::new(Pmt::Nil)).clone()
}

fn convert_all(items: &[Pmt]) -> Result<Vec<Pmc>> {
    items.iter().map(pmt_to_pmc).collect()
}

/// Bulk copy into an array of the same element type.
fn uniform_to_array(uniform: &UniformVector) -> Result<PmcArray> {
    let array = match uniform {
        UniformVector::U8(s) => PmcArray::U8(s.snapshot()?),
        UniformVector::S8(s) => PmcArray::I8(s.snapshot()?),
        UniformVector::U16(s) => PmcArray::U16(s.snapshot()?),
        UniformVector::S16(s) => PmcArray::I16(s.snapshot()?),
        UniformVector::U32(s) => PmcArray::U32(s.snapshot()?),
        UniformVector::S32(s) => PmcArray::I32(s.snapshot()?),
        UniformVector::U64(s) => PmcArray::U64(s.snapshot()?),
        UniformVector::S64(s) => PmcArray::I64(s.snapshot()?),
        UniformVector::F32(s) => PmcArray::F32(s.snapshot()?),
        UniformVector::F64(s) => PmcArray::F64(s.snapshot()?),
        UniformVector::C32(s) => PmcArray::C32(s.snapshot()?),
        UniformVector::C64(s) => PmcArray::C64(s.snapshot()?),
    };
    Ok(array)
}

/// Convert a `Pmt` list into a `Pmc` set.
///
/// Not provided: a proper list fails with
/// [`Error::UnsupportedConversion`] rather than guessing at duplicate
/// handling. Anything that is not a list fails with [`Error::TypeError`].
pub fn pmt_list_to_pmc_set(value: &Pmt) -> Result<Pmc> {
    if value.is_proper_list() {
        Err(Error::unsupported("list", "set"))
    } else {
        Err(Error::type_error_in(
            "pmt_list_to_pmc_set",
            "list",
            value.type_name(),
        ))
    }
}

/// Conversion of a value into a `Pmc`.
pub trait ToPmc {
    fn to_pmc(&self) -> Result<Pmc>;
}

impl ToPmc for Pmt {
    fn to_pmc(&self) -> Result<Pmc> {
        pmt_to_pmc(self)
    }
}
