// pmx-pmt - Persistent dictionaries
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Persistent dictionaries keyed by `Pmt` values.
//!
//! Every update returns a new dictionary and leaves the receiver untouched.
//! Versions share structure through `im::OrdMap`, so an update costs a path
//! copy rather than a full duplicate. Keys are unique under structural
//! equality.

use std::fmt;

use im::OrdMap;

use crate::value::Pmt;

/// A persistent map from `Pmt` keys to `Pmt` values.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PmtDict {
    entries: OrdMap<Pmt, Pmt>,
}

impl PmtDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        PmtDict {
            entries: OrdMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// New dictionary with `key` bound to `value`, replacing any previous binding.
    #[must_use]
    pub fn add(&self, key: Pmt, value: Pmt) -> Self {
        PmtDict {
            entries: self.entries.update(key, value),
        }
    }

    /// New dictionary without `key`.
    #[must_use]
    pub fn delete(&self, key: &Pmt) -> Self {
        PmtDict {
            entries: self.entries.without(key),
        }
    }

    /// True if `key` is bound.
    pub fn has_key(&self, key: &Pmt) -> bool {
        self.entries.contains_key(key)
    }

    /// The value bound to `key`.
    pub fn get(&self, key: &Pmt) -> Option<&Pmt> {
        self.entries.get(key)
    }

    /// The value bound to `key`, or `not_found`.
    pub fn get_or(&self, key: &Pmt, not_found: Pmt) -> Pmt {
        self.entries.get(key).cloned().unwrap_or(not_found)
    }

    /// New dictionary holding every entry of `self` and of `other`; on a
    /// shared key the binding from `other` wins.
    #[must_use]
    pub fn update(&self, other: &PmtDict) -> Self {
        PmtDict {
            entries: other.entries.clone().union(self.entries.clone()),
        }
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pmt, &Pmt)> {
        self.entries.iter()
    }

    /// Entries as a proper list of `(key . value)` pairs.
    pub fn items(&self) -> Pmt {
        Pmt::list(
            self.entries
                .iter()
                .map(|(k, v)| Pmt::cons(k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Keys as a proper list.
    pub fn keys(&self) -> Pmt {
        Pmt::list(self.entries.keys().cloned().collect())
    }

    /// Values as a proper list.
    pub fn values(&self) -> Pmt {
        Pmt::list(self.entries.values().cloned().collect())
    }

    /// True if both dictionaries share the same root.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.entries.ptr_eq(&other.entries)
    }
}

impl FromIterator<(Pmt, Pmt)> for PmtDict {
    fn from_iter<I: IntoIterator<Item = (Pmt, Pmt)>>(iter: I) -> Self {
        PmtDict {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PmtDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({} . {})", k, v)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for PmtDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
