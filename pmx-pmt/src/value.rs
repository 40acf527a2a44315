// pmx-pmt - Value types for Pmt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for the symbolic message universe.
//!
//! `Pmt` is a cheap-to-clone handle: compound values sit behind `Arc`, so a
//! clone shares the underlying value. Pairs, tuples and dictionaries are
//! immutable once built; vectors and uniform vectors can be updated in place
//! by whoever holds them.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use num_complex::Complex64;

use crate::dict::PmtDict;
use crate::error::{Error, Result};
use crate::shared::SharedVec;
use crate::symbol::Symbol;
use crate::uniform::{UniformElement, UniformVector};

/// A cons cell.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PmtPair {
    pub car: Pmt,
    pub cdr: Pmt,
}

/// An opaque payload of any `Send + Sync` type.
///
/// Compared by identity. The identity is the payload's own allocation unless
/// the handle was built with [`PmtAny::anchored`], in which case it is the
/// anchor's. The handle keeps its identity allocation alive, so the address
/// cannot be reused while the handle exists.
#[derive(Clone)]
pub struct PmtAny {
    value: Arc<dyn Any + Send + Sync>,
    identity: Arc<dyn Any + Send + Sync>,
}

impl PmtAny {
    /// Wrap `value` in a fresh allocation.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an existing allocation without copying it.
    pub fn from_arc(value: Arc<dyn Any + Send + Sync>) -> Self {
        PmtAny {
            identity: value.clone(),
            value,
        }
    }

    /// Wrap `value`, borrowing its identity from `anchor`.
    ///
    /// Two handles anchored to the same allocation compare equal even when
    /// their payloads were allocated separately.
    pub fn anchored<T: Any + Send + Sync>(value: T, anchor: Arc<dyn Any + Send + Sync>) -> Self {
        PmtAny {
            value: Arc::new(value),
            identity: anchor,
        }
    }

    /// The payload, if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// True if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    /// The shared payload allocation.
    pub fn as_arc(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.value
    }

    /// The allocation this handle is compared by.
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

impl PartialEq for PmtAny {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PmtAny {}

impl PartialOrd for PmtAny {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PmtAny {
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

/// A symbolic message value.
#[derive(Clone, Default)]
pub enum Pmt {
    /// An unset handle: no value at all
    #[default]
    Null,
    /// The empty list
    Nil,
    /// `#t` or `#f`
    Bool(bool),
    /// Interned symbol
    Symbol(Symbol),
    /// Exact integer of the platform `long` width
    Integer(i64),
    /// Unsigned 64-bit integer, a kind of its own
    Uint64(u64),
    /// Double precision real
    Real(f64),
    /// Double precision complex
    Complex(Complex64),
    /// Cons cell
    Pair(Arc<PmtPair>),
    /// Immutable fixed-length tuple
    Tuple(Arc<[Pmt]>),
    /// Mutable vector of arbitrary values
    Vector(SharedVec<Pmt>),
    /// Mutable homogeneous numeric vector
    Uniform(UniformVector),
    /// Persistent dictionary
    Dict(PmtDict),
    /// Opaque payload
    Any(PmtAny),
}

// ============================================================================
// Constructors
// ============================================================================

impl Pmt {
    /// Return `#t` or `#f`.
    pub fn from_bool(b: bool) -> Self {
        Pmt::Bool(b)
    }

    /// Return the symbol whose name is `name`.
    pub fn symbol(name: &str) -> Self {
        Pmt::Symbol(Symbol::new(name))
    }

    /// Alias for [`Pmt::symbol`].
    pub fn string_to_symbol(name: &str) -> Self {
        Pmt::symbol(name)
    }

    /// Return an exact integer.
    pub fn from_long(n: i64) -> Self {
        Pmt::Integer(n)
    }

    /// Return an unsigned 64-bit integer.
    pub fn from_uint64(n: u64) -> Self {
        Pmt::Uint64(n)
    }

    /// Return a real.
    pub fn from_double(x: f64) -> Self {
        Pmt::Real(x)
    }

    /// Return the complex number `re + im*i`.
    pub fn make_rectangular(re: f64, im: f64) -> Self {
        Pmt::Complex(Complex64::new(re, im))
    }

    /// Return a complex number.
    pub fn from_complex(z: Complex64) -> Self {
        Pmt::Complex(z)
    }

    /// Return a new pair.
    pub fn cons(car: Pmt, cdr: Pmt) -> Self {
        Pmt::Pair(Arc::new(PmtPair { car, cdr }))
    }

    /// Return a proper list holding `elements`.
    pub fn list(elements: Vec<Pmt>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Pmt::Nil, |tail, head| Pmt::cons(head, tail))
    }

    /// Return a tuple holding `elements`.
    pub fn tuple(elements: Vec<Pmt>) -> Self {
        Pmt::Tuple(elements.into())
    }

    /// Return a vector of `len` elements, each set to `fill`.
    pub fn make_vector(len: usize, fill: Pmt) -> Self {
        Pmt::Vector(SharedVec::new("vector", vec![fill; len]))
    }

    /// Return a vector holding `elements`.
    pub fn vector(elements: Vec<Pmt>) -> Self {
        Pmt::Vector(SharedVec::new("vector", elements))
    }

    /// Return a uniform vector holding a copy of `elements`.
    pub fn init_uniform<T: UniformElement>(elements: &[T]) -> Self {
        Pmt::Uniform(UniformVector::from_slice(elements))
    }

    /// Return a uniform vector of `len` elements, each set to `fill`.
    pub fn make_uniform<T: UniformElement>(len: usize, fill: T) -> Self {
        Pmt::init_uniform(&vec![fill; len])
    }

    /// Return an empty dictionary.
    pub fn make_dict() -> Self {
        Pmt::Dict(PmtDict::new())
    }

    /// Wrap an arbitrary payload.
    pub fn any<T: Any + Send + Sync>(value: T) -> Self {
        Pmt::Any(PmtAny::new(value))
    }

    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Pmt::Null => "null",
            Pmt::Nil => "nil",
            Pmt::Bool(_) => "bool",
            Pmt::Symbol(_) => "symbol",
            Pmt::Integer(_) => "integer",
            Pmt::Uint64(_) => "uint64",
            Pmt::Real(_) => "real",
            Pmt::Complex(_) => "complex",
            Pmt::Pair(_) => "pair",
            Pmt::Tuple(_) => "tuple",
            Pmt::Vector(_) => "vector",
            Pmt::Uniform(u) => u.element_type().vector_name(),
            Pmt::Dict(_) => "dict",
            Pmt::Any(_) => "any",
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

impl Pmt {
    pub fn is_null(&self) -> bool {
        matches!(self, Pmt::Null)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Pmt::Nil)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Pmt::Bool(_))
    }

    /// False only for `#f`.
    pub fn is_true(&self) -> bool {
        !self.is_false()
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Pmt::Bool(false))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Pmt::Symbol(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Pmt::Integer(_))
    }

    pub fn is_uint64(&self) -> bool {
        matches!(self, Pmt::Uint64(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Pmt::Real(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Pmt::Complex(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Pmt::Integer(_) | Pmt::Uint64(_) | Pmt::Real(_) | Pmt::Complex(_)
        )
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Pmt::Pair(_))
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Pmt::Tuple(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Pmt::Vector(_))
    }

    pub fn is_uniform_vector(&self) -> bool {
        matches!(self, Pmt::Uniform(_))
    }

    /// True for a uniform vector of element type `T`.
    pub fn is_uniform<T: UniformElement>(&self) -> bool {
        matches!(self, Pmt::Uniform(u) if u.storage::<T>().is_some())
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Pmt::Dict(_))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Pmt::Any(_))
    }

    /// True for `()` and for chains of pairs ending in `()`.
    pub fn is_proper_list(&self) -> bool {
        let mut cursor = self;
        loop {
            match cursor {
                Pmt::Nil => return true,
                Pmt::Pair(pair) => cursor = &pair.cdr,
                _ => return false,
            }
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Pmt {
    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Pmt::Bool(b) => Ok(*b),
            other => Err(Error::wrong_type_in("to_bool", "bool", other.type_name())),
        }
    }

    /// Name of a symbol.
    pub fn symbol_to_string(&self) -> Result<&str> {
        match self {
            Pmt::Symbol(sym) => Ok(sym.name()),
            other => Err(Error::wrong_type_in(
                "symbol_to_string",
                "symbol",
                other.type_name(),
            )),
        }
    }

    /// The symbol itself.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Pmt::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn to_long(&self) -> Result<i64> {
        match self {
            Pmt::Integer(n) => Ok(*n),
            other => Err(Error::wrong_type_in("to_long", "integer", other.type_name())),
        }
    }

    /// Accepts `Uint64` and non-negative `Integer`.
    pub fn to_uint64(&self) -> Result<u64> {
        match self {
            Pmt::Uint64(n) => Ok(*n),
            Pmt::Integer(n) if *n >= 0 => Ok(*n as u64),
            Pmt::Integer(_) => Err(Error::wrong_type_in(
                "to_uint64",
                "non-negative integer",
                "negative integer",
            )),
            other => Err(Error::wrong_type_in("to_uint64", "uint64", other.type_name())),
        }
    }

    /// Accepts any real number kind.
    pub fn to_double(&self) -> Result<f64> {
        match self {
            Pmt::Real(x) => Ok(*x),
            Pmt::Integer(n) => Ok(*n as f64),
            Pmt::Uint64(n) => Ok(*n as f64),
            other => Err(Error::wrong_type_in("to_double", "real", other.type_name())),
        }
    }

    /// Accepts any number kind.
    pub fn to_complex(&self) -> Result<Complex64> {
        match self {
            Pmt::Complex(z) => Ok(*z),
            Pmt::Real(x) => Ok(Complex64::new(*x, 0.0)),
            Pmt::Integer(n) => Ok(Complex64::new(*n as f64, 0.0)),
            Pmt::Uint64(n) => Ok(Complex64::new(*n as f64, 0.0)),
            other => Err(Error::wrong_type_in("to_complex", "complex", other.type_name())),
        }
    }

    pub fn car(&self) -> Result<&Pmt> {
        match self {
            Pmt::Pair(pair) => Ok(&pair.car),
            other => Err(Error::wrong_type_in("car", "pair", other.type_name())),
        }
    }

    pub fn cdr(&self) -> Result<&Pmt> {
        match self {
            Pmt::Pair(pair) => Ok(&pair.cdr),
            other => Err(Error::wrong_type_in("cdr", "pair", other.type_name())),
        }
    }

    pub fn tuple_ref(&self, index: usize) -> Result<&Pmt> {
        match self {
            Pmt::Tuple(items) => items
                .get(index)
                .ok_or_else(|| Error::out_of_bounds(index, items.len())),
            other => Err(Error::wrong_type_in("tuple_ref", "tuple", other.type_name())),
        }
    }

    /// Tuple slots.
    pub fn tuple_elements(&self) -> Result<&[Pmt]> {
        match self {
            Pmt::Tuple(items) => Ok(items),
            other => Err(Error::wrong_type_in(
                "tuple_elements",
                "tuple",
                other.type_name(),
            )),
        }
    }

    fn as_vector(&self, op: &'static str) -> Result<&SharedVec<Pmt>> {
        match self {
            Pmt::Vector(v) => Ok(v),
            other => Err(Error::wrong_type_in(op, "vector", other.type_name())),
        }
    }

    pub fn vector_ref(&self, index: usize) -> Result<Pmt> {
        self.as_vector("vector_ref")?.get(index)
    }

    /// Replace element `index` in place. Every clone of this vector sees it.
    pub fn vector_set(&self, index: usize, value: Pmt) -> Result<()> {
        self.as_vector("vector_set")?.set(index, value)
    }

    pub fn vector_fill(&self, value: Pmt) -> Result<()> {
        self.as_vector("vector_fill")?.fill(value)
    }

    /// Copy of the vector's elements at this moment.
    pub fn vector_elements(&self) -> Result<Vec<Pmt>> {
        self.as_vector("vector_elements")?.snapshot()
    }

    /// The uniform vector, if this is one.
    pub fn uniform_vector(&self) -> Option<&UniformVector> {
        match self {
            Pmt::Uniform(u) => Some(u),
            _ => None,
        }
    }

    fn uniform_storage<T: UniformElement>(&self, op: &'static str) -> Result<&SharedVec<T>> {
        let expected = T::ELEMENT_TYPE.vector_name();
        match self {
            Pmt::Uniform(u) => u
                .storage::<T>()
                .ok_or_else(|| Error::wrong_type_in(op, expected, self.type_name())),
            other => Err(Error::wrong_type_in(op, expected, other.type_name())),
        }
    }

    /// Copy of a uniform vector's elements.
    pub fn uniform_elements<T: UniformElement>(&self) -> Result<Vec<T>> {
        self.uniform_storage::<T>("uniform_elements")?.snapshot()
    }

    pub fn uniform_ref<T: UniformElement>(&self, index: usize) -> Result<T> {
        self.uniform_storage::<T>("uniform_ref")?.get(index)
    }

    /// Replace element `index` in place.
    pub fn uniform_set<T: UniformElement>(&self, index: usize, value: T) -> Result<()> {
        self.uniform_storage::<T>("uniform_set")?.set(index, value)
    }

    pub fn any_ref(&self) -> Result<&PmtAny> {
        match self {
            Pmt::Any(a) => Ok(a),
            other => Err(Error::wrong_type_in("any_ref", "any", other.type_name())),
        }
    }
}

// ============================================================================
// Lists and sequences
// ============================================================================

impl Pmt {
    /// Elements of a proper list.
    pub fn list_elements(&self) -> Result<Vec<Pmt>> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                Pmt::Nil => return Ok(out),
                Pmt::Pair(pair) => {
                    out.push(pair.car.clone());
                    cursor = &pair.cdr;
                }
                _ => {
                    return Err(Error::wrong_type_in(
                        "list_elements",
                        "proper list",
                        self.type_name(),
                    ));
                }
            }
        }
    }

    /// New list with `item` appended at the tail.
    pub fn list_add(&self, item: Pmt) -> Result<Pmt> {
        let mut elements = self.list_elements()?;
        elements.push(item);
        Ok(Pmt::list(elements))
    }

    /// New list with the elements in reverse order.
    pub fn reverse(&self) -> Result<Pmt> {
        let mut elements = self.list_elements()?;
        elements.reverse();
        Ok(Pmt::list(elements))
    }

    /// Element `index` of a proper list.
    pub fn nth(&self, index: usize) -> Result<Pmt> {
        let elements = self.list_elements()?;
        let length = elements.len();
        elements
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::out_of_bounds(index, length))
    }

    /// Length of a list, tuple, vector, uniform vector or dictionary.
    pub fn length(&self) -> Result<usize> {
        match self {
            Pmt::Nil | Pmt::Pair(_) => Ok(self.list_elements()?.len()),
            Pmt::Tuple(items) => Ok(items.len()),
            Pmt::Vector(v) => v.len(),
            Pmt::Uniform(u) => u.len(),
            Pmt::Dict(d) => Ok(d.len()),
            other => Err(Error::wrong_type_in("length", "sequence", other.type_name())),
        }
    }
}

// ============================================================================
// Dictionaries
// ============================================================================

impl Pmt {
    /// The dictionary, if this is one.
    pub fn as_dict(&self) -> Option<&PmtDict> {
        match self {
            Pmt::Dict(d) => Some(d),
            _ => None,
        }
    }

    fn dict(&self, op: &'static str) -> Result<&PmtDict> {
        self.as_dict()
            .ok_or_else(|| Error::wrong_type_in(op, "dict", self.type_name()))
    }

    /// New dictionary with `key` bound to `value`.
    pub fn dict_add(&self, key: Pmt, value: Pmt) -> Result<Pmt> {
        Ok(Pmt::Dict(self.dict("dict_add")?.add(key, value)))
    }

    /// New dictionary without `key`.
    pub fn dict_delete(&self, key: &Pmt) -> Result<Pmt> {
        Ok(Pmt::Dict(self.dict("dict_delete")?.delete(key)))
    }

    pub fn dict_has_key(&self, key: &Pmt) -> Result<bool> {
        Ok(self.dict("dict_has_key")?.has_key(key))
    }

    /// Value bound to `key`, or `not_found`.
    pub fn dict_ref(&self, key: &Pmt, not_found: Pmt) -> Result<Pmt> {
        Ok(self.dict("dict_ref")?.get_or(key, not_found))
    }

    /// List of `(key . value)` pairs.
    pub fn dict_items(&self) -> Result<Pmt> {
        Ok(self.dict("dict_items")?.items())
    }

    pub fn dict_keys(&self) -> Result<Pmt> {
        Ok(self.dict("dict_keys")?.keys())
    }

    pub fn dict_values(&self) -> Result<Pmt> {
        Ok(self.dict("dict_values")?.values())
    }

    /// New dictionary merging `other` into this one.
    pub fn dict_update(&self, other: &Pmt) -> Result<Pmt> {
        let base = self.dict("dict_update")?;
        let patch = other.dict("dict_update")?;
        Ok(Pmt::Dict(base.update(patch)))
    }
}

// ============================================================================
// Equivalence
// ============================================================================

impl Pmt {
    /// Identity for compound values, value equality for scalars.
    pub fn eqv(&self, other: &Pmt) -> bool {
        match (self, other) {
            (Pmt::Pair(a), Pmt::Pair(b)) => Arc::ptr_eq(a, b),
            (Pmt::Tuple(a), Pmt::Tuple(b)) => Arc::ptr_eq(a, b),
            (Pmt::Vector(a), Pmt::Vector(b)) => a.ptr_eq(b),
            (Pmt::Uniform(a), Pmt::Uniform(b)) => a.ptr_eq(b),
            (Pmt::Dict(a), Pmt::Dict(b)) => a.ptr_eq(b),
            _ => self == other,
        }
    }

    /// Structural equality.
    pub fn equal(&self, other: &Pmt) -> bool {
        self == other
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Pmt::Null => 0,
            Pmt::Nil => 1,
            Pmt::Bool(_) => 2,
            Pmt::Symbol(_) => 3,
            Pmt::Integer(_) => 4,
            Pmt::Uint64(_) => 5,
            Pmt::Real(_) => 6,
            Pmt::Complex(_) => 7,
            Pmt::Pair(_) => 8,
            Pmt::Tuple(_) => 9,
            Pmt::Vector(_) => 10,
            Pmt::Uniform(_) => 11,
            Pmt::Dict(_) => 12,
            Pmt::Any(_) => 13,
        }
    }
}

fn complex_bits_eq(a: &Complex64, b: &Complex64) -> bool {
    a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
}

impl PartialEq for Pmt {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pmt::Null, Pmt::Null) => true,
            (Pmt::Nil, Pmt::Nil) => true,
            (Pmt::Bool(a), Pmt::Bool(b)) => a == b,
            (Pmt::Symbol(a), Pmt::Symbol(b)) => a == b,
            (Pmt::Integer(a), Pmt::Integer(b)) => a == b,
            (Pmt::Uint64(a), Pmt::Uint64(b)) => a == b,
            (Pmt::Real(a), Pmt::Real(b)) => a.to_bits() == b.to_bits(),
            (Pmt::Complex(a), Pmt::Complex(b)) => complex_bits_eq(a, b),
            (Pmt::Pair(a), Pmt::Pair(b)) => Arc::ptr_eq(a, b) || a == b,
            (Pmt::Tuple(a), Pmt::Tuple(b)) => a == b,
            (Pmt::Vector(a), Pmt::Vector(b)) => {
                a.ptr_eq(b) || *a.read_lossy() == *b.read_lossy()
            }
            (Pmt::Uniform(a), Pmt::Uniform(b)) => a == b,
            (Pmt::Dict(a), Pmt::Dict(b)) => a == b,
            (Pmt::Any(a), Pmt::Any(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Pmt {}

impl PartialOrd for Pmt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pmt {
    fn cmp(&self, other: &Self) -> Ordering {
        let ra = self.kind_rank();
        let rb = other.kind_rank();
        if ra != rb {
            return ra.cmp(&rb);
        }

        match (self, other) {
            (Pmt::Bool(a), Pmt::Bool(b)) => a.cmp(b),
            (Pmt::Symbol(a), Pmt::Symbol(b)) => a.cmp(b),
            (Pmt::Integer(a), Pmt::Integer(b)) => a.cmp(b),
            (Pmt::Uint64(a), Pmt::Uint64(b)) => a.cmp(b),
            (Pmt::Real(a), Pmt::Real(b)) => a.total_cmp(b),
            (Pmt::Complex(a), Pmt::Complex(b)) => {
                a.re.total_cmp(&b.re).then_with(|| a.im.total_cmp(&b.im))
            }
            (Pmt::Pair(a), Pmt::Pair(b)) => {
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.cmp(b)
                }
            }
            (Pmt::Tuple(a), Pmt::Tuple(b)) => a.cmp(b),
            (Pmt::Vector(a), Pmt::Vector(b)) => {
                if a.ptr_eq(b) {
                    Ordering::Equal
                } else {
                    a.read_lossy().as_slice().cmp(b.read_lossy().as_slice())
                }
            }
            (Pmt::Uniform(a), Pmt::Uniform(b)) => a.cmp(b),
            (Pmt::Dict(a), Pmt::Dict(b)) => a.cmp(b),
            (Pmt::Any(a), Pmt::Any(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Display implementation
// ============================================================================

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Pmt], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Pmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pmt::Null => write!(f, "#<null>"),
            Pmt::Nil => write!(f, "()"),
            Pmt::Bool(true) => write!(f, "#t"),
            Pmt::Bool(false) => write!(f, "#f"),
            Pmt::Symbol(sym) => write!(f, "{}", sym),
            Pmt::Integer(n) => write!(f, "{}", n),
            Pmt::Uint64(n) => write!(f, "{}", n),
            Pmt::Real(x) => write!(f, "{}", x),
            Pmt::Complex(z) => write!(f, "{}", z),
            Pmt::Pair(_) => {
                // Lisp printing: (a b c) for proper lists, (a b . c) otherwise
                write!(f, "(")?;
                let mut cursor = self;
                let mut first = true;
                loop {
                    match cursor {
                        Pmt::Pair(pair) => {
                            if !first {
                                write!(f, " ")?;
                            }
                            first = false;
                            write!(f, "{}", pair.car)?;
                            cursor = &pair.cdr;
                        }
                        Pmt::Nil => break,
                        tail => {
                            write!(f, " . {}", tail)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
            Pmt::Tuple(items) => write_seq(f, "{", items, "}"),
            Pmt::Vector(v) => write_seq(f, "#(", &v.read_lossy(), ")"),
            Pmt::Uniform(u) => write!(f, "{}", u),
            Pmt::Dict(d) => write!(f, "{}", d),
            Pmt::Any(_) => write!(f, "#<any>"),
        }
    }
}

impl fmt::Debug for Pmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Conversions from native Rust values
// ============================================================================

impl From<bool> for Pmt {
    fn from(b: bool) -> Self {
        Pmt::Bool(b)
    }
}

impl From<i32> for Pmt {
    fn from(n: i32) -> Self {
        Pmt::Integer(n as i64)
    }
}

impl From<i64> for Pmt {
    fn from(n: i64) -> Self {
        Pmt::Integer(n)
    }
}

impl From<u64> for Pmt {
    fn from(n: u64) -> Self {
        Pmt::Uint64(n)
    }
}

impl From<f32> for Pmt {
    fn from(x: f32) -> Self {
        Pmt::Real(x as f64)
    }
}

impl From<f64> for Pmt {
    fn from(x: f64) -> Self {
        Pmt::Real(x)
    }
}

impl From<Complex64> for Pmt {
    fn from(z: Complex64) -> Self {
        Pmt::Complex(z)
    }
}

impl From<&str> for Pmt {
    fn from(name: &str) -> Self {
        Pmt::symbol(name)
    }
}

impl From<String> for Pmt {
    fn from(name: String) -> Self {
        Pmt::symbol(&name)
    }
}

impl From<Symbol> for Pmt {
    fn from(sym: Symbol) -> Self {
        Pmt::Symbol(sym)
    }
}

impl From<PmtDict> for Pmt {
    fn from(d: PmtDict) -> Self {
        Pmt::Dict(d)
    }
}

impl<T: Into<Pmt>> From<Option<T>> for Pmt {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Pmt::Null,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
