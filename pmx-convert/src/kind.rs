// pmx-convert - Kind classification
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Semantic kinds shared by both value universes.
//!
//! Variants are declared in classification priority order: null, boolean,
//! symbol/string, numbers from narrow to wide, then pair, tuple, vector,
//! numeric array, dictionary, set, and finally opaque. The derived `Ord`
//! follows that order. Classification is a single match per universe and is
//! total: anything without a dedicated kind is `Opaque`.

use std::fmt;

use pmx_pmc::{Pmc, PmcArray, ScalarType};
use pmx_pmt::{ElementType, Pmt, UniformVector};

/// The semantic kind of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Null,
    Bool,
    Symbol,
    Integer { bits: u8, signed: bool },
    Real { bits: u8 },
    Complex { bits: u8 },
    Pair,
    Tuple(usize),
    Vector,
    NumericArray(ScalarType),
    Dict,
    Set,
    /// The empty list, which has no dedicated container kind
    EmptyList,
    Opaque,
}

impl Kind {
    /// Short name used in log lines and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Symbol => "symbol",
            Kind::Integer { .. } => "integer",
            Kind::Real { .. } => "real",
            Kind::Complex { .. } => "complex",
            Kind::Pair => "pair",
            Kind::Tuple(_) => "tuple",
            Kind::Vector => "vector",
            Kind::NumericArray(_) => "numeric array",
            Kind::Dict => "dict",
            Kind::Set => "set",
            Kind::EmptyList => "empty list",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Integer { bits, signed: true } => write!(f, "i{}", bits),
            Kind::Integer { bits, signed: false } => write!(f, "u{}", bits),
            Kind::Real { bits } => write!(f, "f{}", bits),
            Kind::Complex { bits } => write!(f, "c{}", bits),
            Kind::Tuple(arity) => write!(f, "tuple/{}", arity),
            Kind::NumericArray(scalar) => write!(f, "{}[]", scalar),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Determine the semantic kind of a value. Pure and total.
pub trait Classify {
    fn classify(&self) -> Kind;
}

impl Classify for Pmc {
    fn classify(&self) -> Kind {
        match self {
            Pmc::Null => Kind::Null,
            Pmc::Bool(_) => Kind::Bool,
            Pmc::String(_) => Kind::Symbol,
            Pmc::I8(_) => Kind::Integer { bits: 8, signed: true },
            Pmc::U8(_) => Kind::Integer { bits: 8, signed: false },
            Pmc::I16(_) => Kind::Integer { bits: 16, signed: true },
            Pmc::U16(_) => Kind::Integer { bits: 16, signed: false },
            Pmc::I32(_) => Kind::Integer { bits: 32, signed: true },
            Pmc::U32(_) => Kind::Integer { bits: 32, signed: false },
            Pmc::I64(_) => Kind::Integer { bits: 64, signed: true },
            Pmc::U64(_) => Kind::Integer { bits: 64, signed: false },
            Pmc::F32(_) => Kind::Real { bits: 32 },
            Pmc::F64(_) => Kind::Real { bits: 64 },
            Pmc::C32(_) => Kind::Complex { bits: 32 },
            Pmc::C64(_) => Kind::Complex { bits: 64 },
            Pmc::Pair(_) => Kind::Pair,
            Pmc::Tuple(t) => Kind::Tuple(t.arity()),
            Pmc::List(_) => Kind::Vector,
            Pmc::Array(array) => Kind::NumericArray(array.scalar_type()),
            Pmc::Dict(_) => Kind::Dict,
            Pmc::Set(_) => Kind::Set,
            // Even when it carries a Pmt; unwrapping is the converter's job
            Pmc::Any(_) => Kind::Opaque,
        }
    }
}

impl Classify for Pmt {
    fn classify(&self) -> Kind {
        match self {
            Pmt::Null => Kind::Null,
            Pmt::Bool(_) => Kind::Bool,
            Pmt::Symbol(_) => Kind::Symbol,
            Pmt::Integer(_) => Kind::Integer { bits: 64, signed: true },
            Pmt::Uint64(_) => Kind::Integer { bits: 64, signed: false },
            Pmt::Real(_) => Kind::Real { bits: 64 },
            Pmt::Complex(_) => Kind::Complex { bits: 64 },
            Pmt::Pair(_) => Kind::Pair,
            Pmt::Tuple(items) => Kind::Tuple(items.len()),
            Pmt::Vector(_) => Kind::Vector,
            Pmt::Uniform(u) => Kind::NumericArray(scalar_type_of(u.element_type())),
            Pmt::Dict(_) => Kind::Dict,
            Pmt::Nil => Kind::EmptyList,
            Pmt::Any(_) => Kind::Opaque,
        }
    }
}

impl Classify for PmcArray {
    fn classify(&self) -> Kind {
        Kind::NumericArray(self.scalar_type())
    }
}

impl Classify for UniformVector {
    fn classify(&self) -> Kind {
        Kind::NumericArray(scalar_type_of(self.element_type()))
    }
}

/// The array scalar type matching a uniform vector element type.
pub fn scalar_type_of(element: ElementType) -> ScalarType {
    match element {
        ElementType::U8 => ScalarType::U8,
        ElementType::S8 => ScalarType::I8,
        ElementType::U16 => ScalarType::U16,
        ElementType::S16 => ScalarType::I16,
        ElementType::U32 => ScalarType::U32,
        ElementType::S32 => ScalarType::I32,
        ElementType::U64 => ScalarType::U64,
        ElementType::S64 => ScalarType::I64,
        ElementType::F32 => ScalarType::F32,
        ElementType::F64 => ScalarType::F64,
        ElementType::C32 => ScalarType::C32,
        ElementType::C64 => ScalarType::C64,
    }
}

/// The uniform vector element type matching an array scalar type.
pub fn element_type_of(scalar: ScalarType) -> ElementType {
    match scalar {
        ScalarType::U8 => ElementType::U8,
        ScalarType::I8 => ElementType::S8,
        ScalarType::U16 => ElementType::U16,
        ScalarType::I16 => ElementType::S16,
        ScalarType::U32 => ElementType::U32,
        ScalarType::I32 => ElementType::S32,
        ScalarType::U64 => ElementType::U64,
        ScalarType::I64 => ElementType::S64,
        ScalarType::F32 => ElementType::F32,
        ScalarType::F64 => ElementType::F64,
        ScalarType::C32 => ElementType::C32,
        ScalarType::C64 => ElementType::C64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmx_pmc::PmcTuple;

    #[test]
    fn test_pmc_kinds() {
        assert_eq!(Pmc::Null.classify(), Kind::Null);
        assert_eq!(Pmc::from("x").classify(), Kind::Symbol);
        assert_eq!(
            Pmc::U16(3).classify(),
            Kind::Integer {
                bits: 16,
                signed: false
            }
        );
        assert_eq!(
            Pmc::from(PmcTuple::from_array([Pmc::Null, Pmc::Null, Pmc::Null])).classify(),
            Kind::Tuple(3)
        );
        assert_eq!(
            Pmc::array(vec![0i16; 4]).classify(),
            Kind::NumericArray(ScalarType::I16)
        );
        assert_eq!(Pmc::set([Pmc::I8(1)]).classify(), Kind::Set);
    }

    #[test]
    fn test_pmt_kinds() {
        assert_eq!(Pmt::Nil.classify(), Kind::EmptyList);
        assert_eq!(Pmt::symbol("x").classify(), Kind::Symbol);
        assert_eq!(
            Pmt::from_uint64(1).classify(),
            Kind::Integer {
                bits: 64,
                signed: false
            }
        );
        assert_eq!(
            Pmt::init_uniform(&[1u8]).classify(),
            Kind::NumericArray(ScalarType::U8)
        );
        assert_eq!(Pmt::tuple(vec![]).classify(), Kind::Tuple(0));
    }

    #[test]
    fn test_escape_hatch_is_opaque_even_with_native_payload() {
        assert_eq!(Pmc::any(Pmt::from_long(1)).classify(), Kind::Opaque);
        assert_eq!(Pmt::any(Pmc::I32(1)).classify(), Kind::Opaque);
    }

    #[test]
    fn test_priority_order() {
        let ordered = [
            Kind::Null,
            Kind::Bool,
            Kind::Symbol,
            Kind::Integer { bits: 8, signed: true },
            Kind::Real { bits: 32 },
            Kind::Complex { bits: 32 },
            Kind::Pair,
            Kind::Tuple(0),
            Kind::Vector,
            Kind::NumericArray(ScalarType::U8),
            Kind::Dict,
            Kind::Set,
            Kind::EmptyList,
            Kind::Opaque,
        ];
        assert!(ordered.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_type_mapping_is_bijective() {
        for scalar in ScalarType::ALL {
            assert_eq!(scalar_type_of(element_type_of(scalar)), scalar);
        }
        for element in ElementType::ALL {
            assert_eq!(element_type_of(scalar_type_of(element)), element);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Kind::Integer {
                bits: 32,
                signed: false
            }
            .to_string(),
            "u32"
        );
        assert_eq!(Kind::Tuple(2).to_string(), "tuple/2");
        assert_eq!(Kind::NumericArray(ScalarType::C64).to_string(), "c64[]");
        assert_eq!(Kind::EmptyList.to_string(), "empty list");
    }
}
