// pmx-pmt - Uniform numeric vectors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Homogeneous numeric vectors, one kind per element type.
//!
//! | Element type  | Kind        |
//! |---------------|-------------|
//! | `u8`          | `u8vector`  |
//! | `i8`          | `s8vector`  |
//! | `u16`         | `u16vector` |
//! | `i16`         | `s16vector` |
//! | `u32`         | `u32vector` |
//! | `i32`         | `s32vector` |
//! | `u64`         | `u64vector` |
//! | `i64`         | `s64vector` |
//! | `f32`         | `f32vector` |
//! | `f64`         | `f64vector` |
//! | `Complex32`   | `c32vector` |
//! | `Complex64`   | `c64vector` |

use std::cmp::Ordering;
use std::fmt;

use num_complex::{Complex32, Complex64};

use crate::error::Result;
use crate::shared::SharedVec;

/// Element type of a uniform vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
    F32,
    F64,
    C32,
    C64,
}

impl ElementType {
    /// All element types, in kind order.
    pub const ALL: [ElementType; 12] = [
        ElementType::U8,
        ElementType::S8,
        ElementType::U16,
        ElementType::S16,
        ElementType::U32,
        ElementType::S32,
        ElementType::U64,
        ElementType::S64,
        ElementType::F32,
        ElementType::F64,
        ElementType::C32,
        ElementType::C64,
    ];

    /// Name of the vector kind holding this element type.
    pub fn vector_name(self) -> &'static str {
        match self {
            ElementType::U8 => "u8vector",
            ElementType::S8 => "s8vector",
            ElementType::U16 => "u16vector",
            ElementType::S16 => "s16vector",
            ElementType::U32 => "u32vector",
            ElementType::S32 => "s32vector",
            ElementType::U64 => "u64vector",
            ElementType::S64 => "s64vector",
            ElementType::F32 => "f32vector",
            ElementType::F64 => "f64vector",
            ElementType::C32 => "c32vector",
            ElementType::C64 => "c64vector",
        }
    }

    /// Size of one element in bytes.
    pub fn item_size(self) -> usize {
        match self {
            ElementType::U8 | ElementType::S8 => 1,
            ElementType::U16 | ElementType::S16 => 2,
            ElementType::U32 | ElementType::S32 | ElementType::F32 => 4,
            ElementType::U64 | ElementType::S64 | ElementType::F64 | ElementType::C32 => 8,
            ElementType::C64 => 16,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vector_name())
    }
}

/// A scalar type that can live in a uniform vector.
pub trait UniformElement: Copy + fmt::Display + Send + Sync + 'static {
    /// The element type tag.
    const ELEMENT_TYPE: ElementType;

    /// Wrap shared storage as a uniform vector.
    fn wrap(storage: SharedVec<Self>) -> UniformVector;

    /// The shared storage, if `vector` holds this element type.
    fn storage(vector: &UniformVector) -> Option<&SharedVec<Self>>;

    /// Equality on the bit pattern (NaNs with equal bits compare equal).
    fn same(&self, other: &Self) -> bool;

    /// Total order consistent with [`UniformElement::same`].
    fn order(&self, other: &Self) -> Ordering;
}

/// A homogeneous numeric vector.
#[derive(Clone)]
pub enum UniformVector {
    U8(SharedVec<u8>),
    S8(SharedVec<i8>),
    U16(SharedVec<u16>),
    S16(SharedVec<i16>),
    U32(SharedVec<u32>),
    S32(SharedVec<i32>),
    U64(SharedVec<u64>),
    S64(SharedVec<i64>),
    F32(SharedVec<f32>),
    F64(SharedVec<f64>),
    C32(SharedVec<Complex32>),
    C64(SharedVec<Complex64>),
}

/// Apply `$body` to the storage of whichever variant `$vector` holds.
macro_rules! with_storage {
    ($vector:expr, $storage:ident => $body:expr) => {
        match $vector {
            UniformVector::U8($storage) => $body,
            UniformVector::S8($storage) => $body,
            UniformVector::U16($storage) => $body,
            UniformVector::S16($storage) => $body,
            UniformVector::U32($storage) => $body,
            UniformVector::S32($storage) => $body,
            UniformVector::U64($storage) => $body,
            UniformVector::S64($storage) => $body,
            UniformVector::F32($storage) => $body,
            UniformVector::F64($storage) => $body,
            UniformVector::C32($storage) => $body,
            UniformVector::C64($storage) => $body,
        }
    };
}

macro_rules! impl_uniform_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl UniformElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                fn wrap(storage: SharedVec<Self>) -> UniformVector {
                    UniformVector::$variant(storage)
                }

                fn storage(vector: &UniformVector) -> Option<&SharedVec<Self>> {
                    match vector {
                        UniformVector::$variant(storage) => Some(storage),
                        _ => None,
                    }
                }

                fn same(&self, other: &Self) -> bool {
                    self == other
                }

                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_uniform_float {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl UniformElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                fn wrap(storage: SharedVec<Self>) -> UniformVector {
                    UniformVector::$variant(storage)
                }

                fn storage(vector: &UniformVector) -> Option<&SharedVec<Self>> {
                    match vector {
                        UniformVector::$variant(storage) => Some(storage),
                        _ => None,
                    }
                }

                fn same(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                fn order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_uniform_complex {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl UniformElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                fn wrap(storage: SharedVec<Self>) -> UniformVector {
                    UniformVector::$variant(storage)
                }

                fn storage(vector: &UniformVector) -> Option<&SharedVec<Self>> {
                    match vector {
                        UniformVector::$variant(storage) => Some(storage),
                        _ => None,
                    }
                }

                fn same(&self, other: &Self) -> bool {
                    self.re.to_bits() == other.re.to_bits() && self.im.to_bits() == other.im.to_bits()
                }

                fn order(&self, other: &Self) -> Ordering {
                    self.re
                        .total_cmp(&other.re)
                        .then_with(|| self.im.total_cmp(&other.im))
                }
            }
        )*
    };
}

impl_uniform_int! {
    u8 => U8,
    i8 => S8,
    u16 => U16,
    i16 => S16,
    u32 => U32,
    i32 => S32,
    u64 => U64,
    i64 => S64,
}

impl_uniform_float! {
    f32 => F32,
    f64 => F64,
}

impl_uniform_complex! {
    Complex32 => C32,
    Complex64 => C64,
}

fn slices_same<T: UniformElement>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

fn slices_order<T: UniformElement>(a: &[T], b: &[T]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.order(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

impl UniformVector {
    /// Build a uniform vector holding a copy of `elements`.
    pub fn from_slice<T: UniformElement>(elements: &[T]) -> Self {
        T::wrap(SharedVec::new(
            T::ELEMENT_TYPE.vector_name(),
            elements.to_vec(),
        ))
    }

    /// The element type.
    pub fn element_type(&self) -> ElementType {
        match self {
            UniformVector::U8(_) => ElementType::U8,
            UniformVector::S8(_) => ElementType::S8,
            UniformVector::U16(_) => ElementType::U16,
            UniformVector::S16(_) => ElementType::S16,
            UniformVector::U32(_) => ElementType::U32,
            UniformVector::S32(_) => ElementType::S32,
            UniformVector::U64(_) => ElementType::U64,
            UniformVector::S64(_) => ElementType::S64,
            UniformVector::F32(_) => ElementType::F32,
            UniformVector::F64(_) => ElementType::F64,
            UniformVector::C32(_) => ElementType::C32,
            UniformVector::C64(_) => ElementType::C64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> Result<usize> {
        with_storage!(self, storage => storage.len())
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Typed storage, if this vector holds `T`.
    pub fn storage<T: UniformElement>(&self) -> Option<&SharedVec<T>> {
        T::storage(self)
    }

    /// True if both vectors share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UniformVector::U8(a), UniformVector::U8(b)) => a.ptr_eq(b),
            (UniformVector::S8(a), UniformVector::S8(b)) => a.ptr_eq(b),
            (UniformVector::U16(a), UniformVector::U16(b)) => a.ptr_eq(b),
            (UniformVector::S16(a), UniformVector::S16(b)) => a.ptr_eq(b),
            (UniformVector::U32(a), UniformVector::U32(b)) => a.ptr_eq(b),
            (UniformVector::S32(a), UniformVector::S32(b)) => a.ptr_eq(b),
            (UniformVector::U64(a), UniformVector::U64(b)) => a.ptr_eq(b),
            (UniformVector::S64(a), UniformVector::S64(b)) => a.ptr_eq(b),
            (UniformVector::F32(a), UniformVector::F32(b)) => a.ptr_eq(b),
            (UniformVector::F64(a), UniformVector::F64(b)) => a.ptr_eq(b),
            (UniformVector::C32(a), UniformVector::C32(b)) => a.ptr_eq(b),
            (UniformVector::C64(a), UniformVector::C64(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

fn storage_same<T: UniformElement>(a: &SharedVec<T>, b: &SharedVec<T>) -> bool {
    a.ptr_eq(b) || slices_same(&a.read_lossy(), &b.read_lossy())
}

fn storage_order<T: UniformElement>(a: &SharedVec<T>, b: &SharedVec<T>) -> Ordering {
    if a.ptr_eq(b) {
        return Ordering::Equal;
    }
    slices_order(&a.read_lossy(), &b.read_lossy())
}

impl PartialEq for UniformVector {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UniformVector::U8(a), UniformVector::U8(b)) => storage_same(a, b),
            (UniformVector::S8(a), UniformVector::S8(b)) => storage_same(a, b),
            (UniformVector::U16(a), UniformVector::U16(b)) => storage_same(a, b),
            (UniformVector::S16(a), UniformVector::S16(b)) => storage_same(a, b),
            (UniformVector::U32(a), UniformVector::U32(b)) => storage_same(a, b),
            (UniformVector::S32(a), UniformVector::S32(b)) => storage_same(a, b),
            (UniformVector::U64(a), UniformVector::U64(b)) => storage_same(a, b),
            (UniformVector::S64(a), UniformVector::S64(b)) => storage_same(a, b),
            (UniformVector::F32(a), UniformVector::F32(b)) => storage_same(a, b),
            (UniformVector::F64(a), UniformVector::F64(b)) => storage_same(a, b),
            (UniformVector::C32(a), UniformVector::C32(b)) => storage_same(a, b),
            (UniformVector::C64(a), UniformVector::C64(b)) => storage_same(a, b),
            _ => false,
        }
    }
}

impl Eq for UniformVector {}

impl PartialOrd for UniformVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UniformVector {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (UniformVector::U8(a), UniformVector::U8(b)) => storage_order(a, b),
            (UniformVector::S8(a), UniformVector::S8(b)) => storage_order(a, b),
            (UniformVector::U16(a), UniformVector::U16(b)) => storage_order(a, b),
            (UniformVector::S16(a), UniformVector::S16(b)) => storage_order(a, b),
            (UniformVector::U32(a), UniformVector::U32(b)) => storage_order(a, b),
            (UniformVector::S32(a), UniformVector::S32(b)) => storage_order(a, b),
            (UniformVector::U64(a), UniformVector::U64(b)) => storage_order(a, b),
            (UniformVector::S64(a), UniformVector::S64(b)) => storage_order(a, b),
            (UniformVector::F32(a), UniformVector::F32(b)) => storage_order(a, b),
            (UniformVector::F64(a), UniformVector::F64(b)) => storage_order(a, b),
            (UniformVector::C32(a), UniformVector::C32(b)) => storage_order(a, b),
            (UniformVector::C64(a), UniformVector::C64(b)) => storage_order(a, b),
            _ => self.element_type().cmp(&other.element_type()),
        }
    }
}

fn write_elements<T: UniformElement>(f: &mut fmt::Formatter<'_>, storage: &SharedVec<T>) -> fmt::Result {
    write!(f, "#[")?;
    for (i, item) in storage.read_lossy().iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for UniformVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_storage!(self, storage => write_elements(f, storage))
    }
}

impl fmt::Debug for UniformVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.element_type().vector_name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_keeps_type_and_elements() {
        let v = UniformVector::from_slice(&[1u8, 2, 3]);
        assert_eq!(v.element_type(), ElementType::U8);
        assert_eq!(v.len().unwrap(), 3);
        assert_eq!(
            v.storage::<u8>().unwrap().snapshot().unwrap(),
            vec![1, 2, 3]
        );
        assert!(v.storage::<i8>().is_none());
    }

    #[test]
    fn test_display() {
        let v = UniformVector::from_slice(&[1i16, -2, 3]);
        assert_eq!(v.to_string(), "#[1 -2 3]");
        assert_eq!(format!("{:?}", v), "s16vector#[1 -2 3]");
        let empty = UniformVector::from_slice::<f64>(&[]);
        assert_eq!(empty.to_string(), "#[]");
    }

    #[test]
    fn test_equality_is_per_type() {
        let a = UniformVector::from_slice(&[1u32, 2]);
        let b = UniformVector::from_slice(&[1u32, 2]);
        let c = UniformVector::from_slice(&[1i32, 2]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_float_equality_uses_bits() {
        let a = UniformVector::from_slice(&[f32::NAN]);
        let b = UniformVector::from_slice(&[f32::NAN]);
        assert_eq!(a, b);
        let z = UniformVector::from_slice(&[0.0f64]);
        let nz = UniformVector::from_slice(&[-0.0f64]);
        assert_ne!(z, nz);
    }

    #[test]
    fn test_ordering() {
        let a = UniformVector::from_slice(&[1u8, 2]);
        let b = UniformVector::from_slice(&[1u8, 3]);
        let c = UniformVector::from_slice(&[1u8]);
        assert!(a < b);
        assert!(c < a);
        let complex = UniformVector::from_slice(&[Complex64::new(1.0, -1.0)]);
        let complex_hi = UniformVector::from_slice(&[Complex64::new(1.0, 2.0)]);
        assert!(complex < complex_hi);
    }

    #[test]
    fn test_item_size() {
        assert_eq!(ElementType::U8.item_size(), 1);
        assert_eq!(ElementType::C32.item_size(), 8);
        assert_eq!(ElementType::C64.item_size(), 16);
        assert_eq!(ElementType::ALL.len(), 12);
    }
}
