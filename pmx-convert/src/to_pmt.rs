// pmx-convert - Pmc to Pmt conversion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion from `Pmc` containers to `Pmt` values.

use log::{debug, trace};
use num_complex::Complex64;
use pmx_pmc::{Pmc, PmcArray};
use pmx_pmt::{Pmt, PmtAny, PmtDict};

use crate::depth::{ConvertDepthGuard, with_stack};
use crate::error::Result;
use crate::kind::Classify;

/// Convert a `Pmc` into a `Pmt`, recursing into every compound kind.
///
/// Total for well-formed input: a value with no dedicated `Pmt` kind comes
/// back wrapped as `Pmt::Any`. An escape-hatch value that already carries a
/// `Pmt` is unwrapped rather than wrapped a second time.
///
/// Integer kinds narrower than 64 bits become `Pmt::Integer`; both 64-bit
/// kinds become `Pmt::Uint64`, with `i64` reinterpreted bit for bit.
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`](crate::Error::DepthExceeded) if the
/// value nests deeper than [`get_max_convert_depth`](crate::get_max_convert_depth).
/// No partially converted value is ever returned.
pub fn pmc_to_pmt(value: &Pmc) -> Result<Pmt> {
    with_stack(|| convert(value))
}

fn convert(value: &Pmc) -> Result<Pmt> {
    let _guard = ConvertDepthGuard::new()?;
    trace!("pmc_to_pmt: {}", value.classify());

    let converted = match value {
        Pmc::Null => Pmt::Null,
        Pmc::Bool(b) => Pmt::from_bool(*b),
        Pmc::String(s) => Pmt::symbol(s),

        Pmc::I8(n) => Pmt::from_long(i64::from(*n)),
        Pmc::I16(n) => Pmt::from_long(i64::from(*n)),
        Pmc::I32(n) => Pmt::from_long(i64::from(*n)),
        Pmc::U8(n) => Pmt::from_long(i64::from(*n)),
        Pmc::U16(n) => Pmt::from_long(i64::from(*n)),
        Pmc::U32(n) => Pmt::from_long(i64::from(*n)),
        Pmc::I64(n) => Pmt::from_uint64(*n as u64),
        Pmc::U64(n) => Pmt::from_uint64(*n),

        Pmc::F32(x) => Pmt::from_double(f64::from(*x)),
        Pmc::F64(x) => Pmt::from_double(*x),
        Pmc::C32(z) => Pmt::from_complex(Complex64::new(f64::from(z.re), f64::from(z.im))),
        Pmc::C64(z) => Pmt::from_complex(*z),

        Pmc::Pair(pair) => Pmt::cons(pmc_to_pmt(&pair.first)?, pmc_to_pmt(&pair.second)?),
        Pmc::Tuple(tuple) => Pmt::tuple(convert_all(tuple.as_slice())?),
        Pmc::List(items) => Pmt::vector(convert_all(items)?),
        Pmc::Array(array) => array_to_uniform(array),

        Pmc::Dict(map) => {
            let mut dict = PmtDict::new();
            for (k, v) in map {
                let key = pmc_to_pmt(k)?;
                if dict.has_key(&key) {
                    debug!("pmc_to_pmt: dict key {} coalesced with an earlier key", key);
                }
                dict = dict.add(key, pmc_to_pmt(v)?);
            }
            Pmt::Dict(dict)
        }

        // No set kind on the Pmt side: elements in set order as a proper list
        Pmc::Set(items) => {
            let elements = items.iter().map(pmc_to_pmt).collect::<Result<Vec<_>>>()?;
            Pmt::list(elements)
        }

        Pmc::Any(any) => match any.downcast_ref::<Pmt>() {
            Some(inner) => inner.clone(),
            None => {
                debug!("pmc_to_pmt: wrapping opaque payload as any");
                Pmt::Any(PmtAny::anchored(value.clone(), any.identity().clone()))
            }
        },
    };
    Ok(converted)
}

fn convert_all(items: &[Pmc]) -> Result<Vec<Pmt>> {
    items.iter().map(pmc_to_pmt).collect()
}

/// Bulk copy into a uniform vector of the same element type.
fn array_to_uniform(array: &PmcArray) -> Pmt {
    match array {
        PmcArray::U8(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::I8(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::U16(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::I16(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::U32(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::I32(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::U64(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::I64(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::F32(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::F64(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::C32(v) => Pmt::init_uniform(v.as_slice()),
        PmcArray::C64(v) => Pmt::init_uniform(v.as_slice()),
    }
}

/// Conversion of a value into a `Pmt`.
pub trait ToPmt {
    fn to_pmt(&self) -> Result<Pmt>;
}

impl ToPmt for Pmc {
    fn to_pmt(&self) -> Result<Pmt> {
        pmc_to_pmt(self)
    }
}

impl ToPmt for [Pmc] {
    /// A slice becomes a `Pmt` vector.
    fn to_pmt(&self) -> Result<Pmt> {
        let _guard = ConvertDepthGuard::new()?;
        Ok(Pmt::vector(convert_all(self)?))
    }
}
