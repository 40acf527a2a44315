// pmx-pmc - Typed numeric arrays
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Contiguous homogeneous numeric arrays, one variant per scalar type.

use std::cmp::Ordering;
use std::fmt;

use num_complex::{Complex32, Complex64};

/// Scalar element type of a numeric array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    C32,
    C64,
}

impl ScalarType {
    /// All scalar types.
    pub const ALL: [ScalarType; 12] = [
        ScalarType::U8,
        ScalarType::I8,
        ScalarType::U16,
        ScalarType::I16,
        ScalarType::U32,
        ScalarType::I32,
        ScalarType::U64,
        ScalarType::I64,
        ScalarType::F32,
        ScalarType::F64,
        ScalarType::C32,
        ScalarType::C64,
    ];

    /// Rust name of the scalar type.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::U8 => "u8",
            ScalarType::I8 => "i8",
            ScalarType::U16 => "u16",
            ScalarType::I16 => "i16",
            ScalarType::U32 => "u32",
            ScalarType::I32 => "i32",
            ScalarType::U64 => "u64",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::C32 => "c32",
            ScalarType::C64 => "c64",
        }
    }

    /// Width of one component in bits. Complex types report the width of
    /// each of their two parts.
    pub fn bits(self) -> u8 {
        match self {
            ScalarType::U8 | ScalarType::I8 => 8,
            ScalarType::U16 | ScalarType::I16 => 16,
            ScalarType::U32 | ScalarType::I32 | ScalarType::F32 | ScalarType::C32 => 32,
            ScalarType::U64 | ScalarType::I64 | ScalarType::F64 | ScalarType::C64 => 64,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scalar type that can be stored in a [`PmcArray`].
pub trait ArrayElement: Copy + fmt::Debug + Send + Sync + 'static {
    const SCALAR_TYPE: ScalarType;

    /// Wrap an owned buffer.
    fn into_array(elements: Vec<Self>) -> PmcArray;

    /// The buffer, if `array` holds this element type.
    fn slice(array: &PmcArray) -> Option<&[Self]>;

    /// Equality on the bit pattern.
    fn same(&self, other: &Self) -> bool;

    /// Total order consistent with [`ArrayElement::same`].
    fn order(&self, other: &Self) -> Ordering;
}

/// A typed numeric array.
#[derive(Clone)]
pub enum PmcArray {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    U64(Vec<u64>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    C32(Vec<Complex32>),
    C64(Vec<Complex64>),
}

macro_rules! array_element {
    ($ty:ty, $variant:ident, |$a:ident, $b:ident| same: $same:expr, order: $order:expr) => {
        impl ArrayElement for $ty {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;

            fn into_array(elements: Vec<Self>) -> PmcArray {
                PmcArray::$variant(elements)
            }

            fn slice(array: &PmcArray) -> Option<&[Self]> {
                match array {
                    PmcArray::$variant(elements) => Some(elements.as_slice()),
                    _ => None,
                }
            }

            fn same(&self, other: &Self) -> bool {
                let ($a, $b) = (self, other);
                $same
            }

            fn order(&self, other: &Self) -> Ordering {
                let ($a, $b) = (self, other);
                $order
            }
        }
    };
}

macro_rules! int_elements {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(array_element!($ty, $variant, |a, b| same: a == b, order: a.cmp(b));)*
    };
}

macro_rules! float_elements {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(array_element!(
            $ty, $variant,
            |a, b| same: a.to_bits() == b.to_bits(), order: a.total_cmp(b)
        );)*
    };
}

macro_rules! complex_elements {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(array_element!(
            $ty, $variant,
            |a, b| same: a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits(),
            order: a.re.total_cmp(&b.re).then_with(|| a.im.total_cmp(&b.im))
        );)*
    };
}

int_elements! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
}

float_elements! {
    f32 => F32,
    f64 => F64,
}

complex_elements! {
    Complex32 => C32,
    Complex64 => C64,
}

/// Apply `$body` to whichever buffer `$array` holds.
macro_rules! with_elements {
    ($array:expr, $elements:ident => $body:expr) => {
        match $array {
            PmcArray::U8($elements) => $body,
            PmcArray::I8($elements) => $body,
            PmcArray::U16($elements) => $body,
            PmcArray::I16($elements) => $body,
            PmcArray::U32($elements) => $body,
            PmcArray::I32($elements) => $body,
            PmcArray::U64($elements) => $body,
            PmcArray::I64($elements) => $body,
            PmcArray::F32($elements) => $body,
            PmcArray::F64($elements) => $body,
            PmcArray::C32($elements) => $body,
            PmcArray::C64($elements) => $body,
        }
    };
}

impl PmcArray {
    /// Build an array from an owned buffer.
    pub fn new<T: ArrayElement>(elements: Vec<T>) -> Self {
        T::into_array(elements)
    }

    /// Build an array holding a copy of `elements`.
    pub fn from_slice<T: ArrayElement>(elements: &[T]) -> Self {
        T::into_array(elements.to_vec())
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            PmcArray::U8(_) => ScalarType::U8,
            PmcArray::I8(_) => ScalarType::I8,
            PmcArray::U16(_) => ScalarType::U16,
            PmcArray::I16(_) => ScalarType::I16,
            PmcArray::U32(_) => ScalarType::U32,
            PmcArray::I32(_) => ScalarType::I32,
            PmcArray::U64(_) => ScalarType::U64,
            PmcArray::I64(_) => ScalarType::I64,
            PmcArray::F32(_) => ScalarType::F32,
            PmcArray::F64(_) => ScalarType::F64,
            PmcArray::C32(_) => ScalarType::C32,
            PmcArray::C64(_) => ScalarType::C64,
        }
    }

    pub fn len(&self) -> usize {
        with_elements!(self, elements => elements.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The buffer, if this array holds `T`.
    pub fn as_slice<T: ArrayElement>(&self) -> Option<&[T]> {
        T::slice(self)
    }
}

fn slices_same<T: ArrayElement>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

fn slices_order<T: ArrayElement>(a: &[T], b: &[T]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.order(y))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl PartialEq for PmcArray {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PmcArray::U8(a), PmcArray::U8(b)) => slices_same(a, b),
            (PmcArray::I8(a), PmcArray::I8(b)) => slices_same(a, b),
            (PmcArray::U16(a), PmcArray::U16(b)) => slices_same(a, b),
            (PmcArray::I16(a), PmcArray::I16(b)) => slices_same(a, b),
            (PmcArray::U32(a), PmcArray::U32(b)) => slices_same(a, b),
            (PmcArray::I32(a), PmcArray::I32(b)) => slices_same(a, b),
            (PmcArray::U64(a), PmcArray::U64(b)) => slices_same(a, b),
            (PmcArray::I64(a), PmcArray::I64(b)) => slices_same(a, b),
            (PmcArray::F32(a), PmcArray::F32(b)) => slices_same(a, b),
            (PmcArray::F64(a), PmcArray::F64(b)) => slices_same(a, b),
            (PmcArray::C32(a), PmcArray::C32(b)) => slices_same(a, b),
            (PmcArray::C64(a), PmcArray::C64(b)) => slices_same(a, b),
            _ => false,
        }
    }
}

impl Eq for PmcArray {}

impl PartialOrd for PmcArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PmcArray {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PmcArray::U8(a), PmcArray::U8(b)) => slices_order(a, b),
            (PmcArray::I8(a), PmcArray::I8(b)) => slices_order(a, b),
            (PmcArray::U16(a), PmcArray::U16(b)) => slices_order(a, b),
            (PmcArray::I16(a), PmcArray::I16(b)) => slices_order(a, b),
            (PmcArray::U32(a), PmcArray::U32(b)) => slices_order(a, b),
            (PmcArray::I32(a), PmcArray::I32(b)) => slices_order(a, b),
            (PmcArray::U64(a), PmcArray::U64(b)) => slices_order(a, b),
            (PmcArray::I64(a), PmcArray::I64(b)) => slices_order(a, b),
            (PmcArray::F32(a), PmcArray::F32(b)) => slices_order(a, b),
            (PmcArray::F64(a), PmcArray::F64(b)) => slices_order(a, b),
            (PmcArray::C32(a), PmcArray::C32(b)) => slices_order(a, b),
            (PmcArray::C64(a), PmcArray::C64(b)) => slices_order(a, b),
            _ => self.scalar_type().cmp(&other.scalar_type()),
        }
    }
}

impl fmt::Debug for PmcArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar_type())?;
        with_elements!(self, elements => write!(f, "{:?}", elements))
    }
}

impl<T: ArrayElement> From<Vec<T>> for PmcArray {
    fn from(elements: Vec<T>) -> Self {
        T::into_array(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_access() {
        let a = PmcArray::new(vec![1u8, 2, 3]);
        assert_eq!(a.scalar_type(), ScalarType::U8);
        assert_eq!(a.len(), 3);
        assert_eq!(a.as_slice::<u8>(), Some(&[1u8, 2, 3][..]));
        assert_eq!(a.as_slice::<i8>(), None);
    }

    #[test]
    fn test_equality_is_per_type() {
        assert_eq!(PmcArray::new(vec![1u16]), PmcArray::new(vec![1u16]));
        assert_ne!(PmcArray::new(vec![1u16]), PmcArray::new(vec![1i16]));
        assert_eq!(
            PmcArray::new(vec![f64::NAN]),
            PmcArray::new(vec![f64::NAN])
        );
    }

    #[test]
    fn test_ordering() {
        assert!(PmcArray::new(vec![1i32, 2]) < PmcArray::new(vec![1i32, 3]));
        assert!(PmcArray::new(vec![1i32]) < PmcArray::new(vec![1i32, 0]));
        assert!(PmcArray::new(vec![9u8]) < PmcArray::new(vec![0i8]));
    }

    #[test]
    fn test_debug() {
        let a = PmcArray::from_slice(&[-1i8, 2]);
        assert_eq!(format!("{:?}", a), "i8[-1, 2]");
        assert!(PmcArray::new(Vec::<Complex32>::new()).is_empty());
    }

    #[test]
    fn test_bits() {
        assert_eq!(ScalarType::C32.bits(), 32);
        assert_eq!(ScalarType::I16.bits(), 16);
        assert_eq!(ScalarType::ALL.len(), 12);
    }
}
