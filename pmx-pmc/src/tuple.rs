// pmx-pmc - Fixed-arity tuples
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tuples of arity 0 through [`MAX_TUPLE_ARITY`].
//!
//! The arity is checked once at construction. `from_array` rejects an
//! oversized array at compile time; `new` rejects an oversized `Vec` with
//! [`Error::ArityError`]. Slots are read back either as a slice or as a
//! fixed-size array of a requested arity.

use std::fmt;

use crate::error::{Error, Result};
use crate::value::Pmc;

/// Largest supported tuple arity.
pub const MAX_TUPLE_ARITY: usize = 10;

/// An immutable tuple of `Pmc` values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PmcTuple {
    items: Box<[Pmc]>,
}

impl PmcTuple {
    /// Build a tuple from `items`, failing if there are more than
    /// [`MAX_TUPLE_ARITY`].
    pub fn new(items: Vec<Pmc>) -> Result<Self> {
        if items.len() > MAX_TUPLE_ARITY {
            return Err(Error::arity_range(0, MAX_TUPLE_ARITY, items.len()));
        }
        Ok(PmcTuple {
            items: items.into_boxed_slice(),
        })
    }

    /// Build a tuple from a fixed-size array.
    pub fn from_array<const N: usize>(items: [Pmc; N]) -> Self {
        const { assert!(N <= MAX_TUPLE_ARITY, "tuple arity exceeds MAX_TUPLE_ARITY") };
        PmcTuple {
            items: Box::new(items),
        }
    }

    /// The empty tuple.
    pub fn empty() -> Self {
        PmcTuple::from_array([])
    }

    pub fn arity(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&Pmc> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Pmc] {
        &self.items
    }

    /// Slots as an array of arity `N`.
    pub fn as_array<const N: usize>(&self) -> Result<&[Pmc; N]> {
        <&[Pmc; N]>::try_from(&*self.items).map_err(|_| Error::arity(N, self.arity()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pmc> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Pmc> {
        self.items.into_vec()
    }
}

impl<'a> IntoIterator for &'a PmcTuple {
    type Item = &'a Pmc;
    type IntoIter = std::slice::Iter<'a, Pmc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Pmc>> for PmcTuple {
    type Error = Error;

    fn try_from(items: Vec<Pmc>) -> Result<Self> {
        PmcTuple::new(items)
    }
}

impl fmt::Display for PmcTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        // A 1-tuple keeps its trailing comma
        if self.items.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for PmcTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AritySpec;

    #[test]
    fn test_arity_limits() {
        assert_eq!(PmcTuple::new(vec![]).unwrap().arity(), 0);
        let ten = PmcTuple::new(vec![Pmc::I32(0); 10]).unwrap();
        assert_eq!(ten.arity(), 10);
        assert_eq!(
            PmcTuple::new(vec![Pmc::I32(0); 11]),
            Err(Error::ArityError {
                expected: AritySpec::Range(0, 10),
                got: 11
            })
        );
    }

    #[test]
    fn test_from_array() {
        let t = PmcTuple::from_array([Pmc::Bool(true), Pmc::from("x")]);
        assert_eq!(t.arity(), 2);
        assert_eq!(t.get(1), Some(&Pmc::from("x")));
        assert_eq!(t.get(2), None);
        assert_eq!(PmcTuple::empty().arity(), 0);
    }

    #[test]
    fn test_as_array_checks_arity() {
        let t = PmcTuple::from_array([Pmc::I8(1), Pmc::I8(2), Pmc::I8(3)]);
        let [a, b, c] = t.as_array::<3>().unwrap();
        assert_eq!((a, b, c), (&Pmc::I8(1), &Pmc::I8(2), &Pmc::I8(3)));
        assert_eq!(t.as_array::<2>(), Err(Error::arity(2, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(PmcTuple::empty().to_string(), "()");
        assert_eq!(PmcTuple::from_array([Pmc::I32(1)]).to_string(), "(1,)");
        assert_eq!(
            PmcTuple::from_array([Pmc::I32(1), Pmc::Bool(false)]).to_string(),
            "(1, false)"
        );
    }
}
