// pmx-pmc - Value types for Pmc
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for the dynamic container universe.

use std::any::Any;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use num_complex::{Complex32, Complex64};

use crate::array::{ArrayElement, PmcArray};
use crate::error::{Error, Result};
use crate::tuple::PmcTuple;

/// An ordered pair.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PmcPair {
    pub first: Pmc,
    pub second: Pmc,
}

/// An opaque payload of any `Send + Sync` type, compared by identity.
///
/// Identity is the payload allocation, or the anchor given to
/// [`PmcAny::anchored`].
#[derive(Clone)]
pub struct PmcAny {
    value: Arc<dyn Any + Send + Sync>,
    identity: Arc<dyn Any + Send + Sync>,
}

impl PmcAny {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc(value: Arc<dyn Any + Send + Sync>) -> Self {
        PmcAny {
            identity: value.clone(),
            value,
        }
    }

    /// Wrap `value`, borrowing its identity from `anchor`.
    pub fn anchored<T: Any + Send + Sync>(value: T, anchor: Arc<dyn Any + Send + Sync>) -> Self {
        PmcAny {
            value: Arc::new(value),
            identity: anchor,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    pub fn as_arc(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.value
    }

    pub fn identity(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.identity
    }

    /// True if both handles have the same identity.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.identity), Arc::as_ptr(&other.identity))
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.identity).cast::<()>() as usize
    }
}

impl PartialEq for PmcAny {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PmcAny {}

impl PartialOrd for PmcAny {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PmcAny {
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

/// A dynamically typed container value.
#[derive(Clone, Default)]
pub enum Pmc {
    /// No value
    #[default]
    Null,
    Bool(bool),
    String(Arc<str>),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    C32(Complex32),
    C64(Complex64),
    Pair(Box<PmcPair>),
    Tuple(PmcTuple),
    /// Growable heterogeneous list
    List(Vec<Pmc>),
    /// Typed numeric array
    Array(PmcArray),
    Dict(BTreeMap<Pmc, Pmc>),
    Set(BTreeSet<Pmc>),
    /// Opaque payload
    Any(PmcAny),
}

impl Pmc {
    pub fn string(s: &str) -> Self {
        Pmc::String(Arc::from(s))
    }

    pub fn pair(first: Pmc, second: Pmc) -> Self {
        Pmc::Pair(Box::new(PmcPair { first, second }))
    }

    /// Build a tuple, failing above the maximum arity.
    pub fn tuple(items: Vec<Pmc>) -> Result<Self> {
        Ok(Pmc::Tuple(PmcTuple::new(items)?))
    }

    pub fn list(items: Vec<Pmc>) -> Self {
        Pmc::List(items)
    }

    pub fn array<T: ArrayElement>(elements: Vec<T>) -> Self {
        Pmc::Array(PmcArray::new(elements))
    }

    pub fn dict<I: IntoIterator<Item = (Pmc, Pmc)>>(entries: I) -> Self {
        Pmc::Dict(entries.into_iter().collect())
    }

    pub fn set<I: IntoIterator<Item = Pmc>>(items: I) -> Self {
        Pmc::Set(items.into_iter().collect())
    }

    /// Wrap an arbitrary payload.
    pub fn any<T: Any + Send + Sync>(value: T) -> Self {
        Pmc::Any(PmcAny::new(value))
    }

    /// Get the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pmc::Null => "null",
            Pmc::Bool(_) => "bool",
            Pmc::String(_) => "string",
            Pmc::I8(_) => "i8",
            Pmc::I16(_) => "i16",
            Pmc::I32(_) => "i32",
            Pmc::I64(_) => "i64",
            Pmc::U8(_) => "u8",
            Pmc::U16(_) => "u16",
            Pmc::U32(_) => "u32",
            Pmc::U64(_) => "u64",
            Pmc::F32(_) => "f32",
            Pmc::F64(_) => "f64",
            Pmc::C32(_) => "c32",
            Pmc::C64(_) => "c64",
            Pmc::Pair(_) => "pair",
            Pmc::Tuple(_) => "tuple",
            Pmc::List(_) => "list",
            Pmc::Array(_) => "array",
            Pmc::Dict(_) => "dict",
            Pmc::Set(_) => "set",
            Pmc::Any(_) => "any",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Pmc::Null)
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Pmc::Bool(b) => Ok(*b),
            other => Err(Error::type_error("bool", other.kind_name())),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Pmc::String(s) => Ok(s.as_ref()),
            other => Err(Error::type_error("string", other.kind_name())),
        }
    }

    pub fn as_pair(&self) -> Result<&PmcPair> {
        match self {
            Pmc::Pair(p) => Ok(p.as_ref()),
            other => Err(Error::type_error("pair", other.kind_name())),
        }
    }

    pub fn as_tuple(&self) -> Result<&PmcTuple> {
        match self {
            Pmc::Tuple(t) => Ok(t),
            other => Err(Error::type_error("tuple", other.kind_name())),
        }
    }

    pub fn as_list(&self) -> Result<&[Pmc]> {
        match self {
            Pmc::List(items) => Ok(items.as_slice()),
            other => Err(Error::type_error("list", other.kind_name())),
        }
    }

    /// Elements of a numeric array of element type `T`.
    pub fn as_array<T: ArrayElement>(&self) -> Result<&[T]> {
        match self {
            Pmc::Array(array) => array
                .as_slice::<T>()
                .ok_or_else(|| Error::type_error(T::SCALAR_TYPE.name(), array.scalar_type().name())),
            other => Err(Error::type_error("array", other.kind_name())),
        }
    }

    pub fn as_dict(&self) -> Result<&BTreeMap<Pmc, Pmc>> {
        match self {
            Pmc::Dict(d) => Ok(d),
            other => Err(Error::type_error("dict", other.kind_name())),
        }
    }

    pub fn as_set(&self) -> Result<&BTreeSet<Pmc>> {
        match self {
            Pmc::Set(s) => Ok(s),
            other => Err(Error::type_error("set", other.kind_name())),
        }
    }

    pub fn as_any(&self) -> Result<&PmcAny> {
        match self {
            Pmc::Any(a) => Ok(a),
            other => Err(Error::type_error("any", other.kind_name())),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Pmc::Null => 0,
            Pmc::Bool(_) => 1,
            Pmc::String(_) => 2,
            Pmc::I8(_) => 3,
            Pmc::I16(_) => 4,
            Pmc::I32(_) => 5,
            Pmc::I64(_) => 6,
            Pmc::U8(_) => 7,
            Pmc::U16(_) => 8,
            Pmc::U32(_) => 9,
            Pmc::U64(_) => 10,
            Pmc::F32(_) => 11,
            Pmc::F64(_) => 12,
            Pmc::C32(_) => 13,
            Pmc::C64(_) => 14,
            Pmc::Pair(_) => 15,
            Pmc::Tuple(_) => 16,
            Pmc::List(_) => 17,
            Pmc::Array(_) => 18,
            Pmc::Dict(_) => 19,
            Pmc::Set(_) => 20,
            Pmc::Any(_) => 21,
        }
    }
}

impl PartialEq for Pmc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pmc {}

impl PartialOrd for Pmc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pmc {
    fn cmp(&self, other: &Self) -> Ordering {
        let ra = self.kind_rank();
        let rb = other.kind_rank();
        if ra != rb {
            return ra.cmp(&rb);
        }

        // Floats are ordered by total_cmp, so NaN equals itself and -0.0 != 0.0
        match (self, other) {
            (Pmc::Bool(a), Pmc::Bool(b)) => a.cmp(b),
            (Pmc::String(a), Pmc::String(b)) => a.cmp(b),
            (Pmc::I8(a), Pmc::I8(b)) => a.cmp(b),
            (Pmc::I16(a), Pmc::I16(b)) => a.cmp(b),
            (Pmc::I32(a), Pmc::I32(b)) => a.cmp(b),
            (Pmc::I64(a), Pmc::I64(b)) => a.cmp(b),
            (Pmc::U8(a), Pmc::U8(b)) => a.cmp(b),
            (Pmc::U16(a), Pmc::U16(b)) => a.cmp(b),
            (Pmc::U32(a), Pmc::U32(b)) => a.cmp(b),
            (Pmc::U64(a), Pmc::U64(b)) => a.cmp(b),
            (Pmc::F32(a), Pmc::F32(b)) => a.total_cmp(b),
            (Pmc::F64(a), Pmc::F64(b)) => a.total_cmp(b),
            (Pmc::C32(a), Pmc::C32(b)) => a.re.total_cmp(&b.re).then_with(|| a.im.total_cmp(&b.im)),
            (Pmc::C64(a), Pmc::C64(b)) => a.re.total_cmp(&b.re).then_with(|| a.im.total_cmp(&b.im)),
            (Pmc::Pair(a), Pmc::Pair(b)) => a.cmp(b),
            (Pmc::Tuple(a), Pmc::Tuple(b)) => a.cmp(b),
            (Pmc::List(a), Pmc::List(b)) => a.cmp(b),
            (Pmc::Array(a), Pmc::Array(b)) => a.cmp(b),
            (Pmc::Dict(a), Pmc::Dict(b)) => a.cmp(b),
            (Pmc::Set(a), Pmc::Set(b)) => a.cmp(b),
            (Pmc::Any(a), Pmc::Any(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Pmc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pmc::Null => write!(f, "null"),
            Pmc::Bool(b) => write!(f, "{}", b),
            Pmc::String(s) => write!(f, "{:?}", s),
            Pmc::I8(n) => write!(f, "{}", n),
            Pmc::I16(n) => write!(f, "{}", n),
            Pmc::I32(n) => write!(f, "{}", n),
            Pmc::I64(n) => write!(f, "{}", n),
            Pmc::U8(n) => write!(f, "{}", n),
            Pmc::U16(n) => write!(f, "{}", n),
            Pmc::U32(n) => write!(f, "{}", n),
            Pmc::U64(n) => write!(f, "{}", n),
            Pmc::F32(x) => write!(f, "{}", x),
            Pmc::F64(x) => write!(f, "{}", x),
            Pmc::C32(z) => write!(f, "{}", z),
            Pmc::C64(z) => write!(f, "{}", z),
            Pmc::Pair(p) => write!(f, "<{}, {}>", p.first, p.second),
            Pmc::Tuple(t) => write!(f, "{}", t),
            Pmc::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Pmc::Array(array) => write!(f, "{:?}", array),
            Pmc::Dict(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Pmc::Set(items) => {
                write!(f, "#{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Pmc::Any(_) => write!(f, "<any>"),
        }
    }
}

impl fmt::Debug for Pmc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Conversions from native Rust values
// ============================================================================

macro_rules! from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Pmc {
                fn from(v: $ty) -> Self {
                    Pmc::$variant(v)
                }
            }
        )*
    };
}

from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Complex32 => C32,
    Complex64 => C64,
    PmcTuple => Tuple,
    PmcArray => Array,
    PmcAny => Any,
}

impl From<&str> for Pmc {
    fn from(s: &str) -> Self {
        Pmc::string(s)
    }
}

impl From<String> for Pmc {
    fn from(s: String) -> Self {
        Pmc::String(Arc::from(s))
    }
}

impl From<Arc<str>> for Pmc {
    fn from(s: Arc<str>) -> Self {
        Pmc::String(s)
    }
}

impl From<Vec<Pmc>> for Pmc {
    fn from(items: Vec<Pmc>) -> Self {
        Pmc::List(items)
    }
}

impl From<(Pmc, Pmc)> for Pmc {
    fn from((first, second): (Pmc, Pmc)) -> Self {
        Pmc::pair(first, second)
    }
}

impl From<BTreeMap<Pmc, Pmc>> for Pmc {
    fn from(map: BTreeMap<Pmc, Pmc>) -> Self {
        Pmc::Dict(map)
    }
}

impl From<BTreeSet<Pmc>> for Pmc {
    fn from(set: BTreeSet<Pmc>) -> Self {
        Pmc::Set(set)
    }
}

impl<T: Into<Pmc>> From<Option<T>> for Pmc {
    fn from(value: Option<T>) -> Self {
        value.map_or(Pmc::Null, Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
