// pmx-pmt - Property-based tests for dictionaries and ordering
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for persistent dictionaries.
//!
//! Every update must leave earlier versions untouched, and the `Ord`
//! used for dictionary keys must agree with `Eq`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use pmx_pmt::{Pmt, PmtDict};
use proptest::prelude::*;

/// Scalar `Pmt` values suitable as dictionary keys
fn scalar() -> impl Strategy<Value = Pmt> {
    prop_oneof![
        Just(Pmt::Null),
        Just(Pmt::Nil),
        any::<bool>().prop_map(Pmt::from_bool),
        "[a-z]{1,6}".prop_map(|s| Pmt::symbol(&s)),
        any::<i64>().prop_map(Pmt::from_long),
        any::<u64>().prop_map(Pmt::from_uint64),
        any::<f64>().prop_map(Pmt::from_double),
    ]
}

/// Small nested values: pairs and tuples of scalars
fn value() -> impl Strategy<Value = Pmt> {
    scalar().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Pmt::cons(a, b)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Pmt::tuple),
            prop::collection::vec(inner, 0..4).prop_map(Pmt::list),
        ]
    })
}

// =============================================================================
// Persistence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding never changes the dictionary it was called on
    #[test]
    fn add_preserves_receiver(
        entries in prop::collection::vec((scalar(), value()), 0..12),
        key in scalar(),
        val in value(),
    ) {
        let before: PmtDict = entries.into_iter().collect();
        let snapshot: Vec<(Pmt, Pmt)> =
            before.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

        let after = before.add(key.clone(), val.clone());

        let now: Vec<(Pmt, Pmt)> =
            before.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert_eq!(snapshot, now);
        prop_assert_eq!(after.get(&key), Some(&val));
    }

    /// Deleting never changes the dictionary it was called on
    #[test]
    fn delete_preserves_receiver(
        entries in prop::collection::vec((scalar(), value()), 1..12),
    ) {
        let dict: PmtDict = entries.iter().cloned().collect();
        let len = dict.len();
        let (victim, _) = &entries[0];

        let smaller = dict.delete(victim);

        prop_assert_eq!(dict.len(), len);
        prop_assert!(dict.has_key(victim));
        prop_assert!(!smaller.has_key(victim));
        prop_assert_eq!(smaller.len(), len - 1);
    }

    /// A dictionary behaves like a BTreeMap with the same keys
    #[test]
    fn dict_matches_btreemap(
        entries in prop::collection::vec((scalar(), value()), 0..16),
    ) {
        let mut model = BTreeMap::new();
        let mut dict = PmtDict::new();
        for (k, v) in entries {
            model.insert(k.clone(), v.clone());
            dict = dict.add(k, v);
        }
        prop_assert_eq!(dict.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(dict.get(k), Some(v));
        }
    }

    /// Items list has one pair per entry
    #[test]
    fn items_length_matches(
        entries in prop::collection::vec((scalar(), value()), 0..12),
    ) {
        let dict: PmtDict = entries.into_iter().collect();
        let items = Pmt::Dict(dict.clone()).dict_items().unwrap();
        prop_assert!(items.is_proper_list());
        prop_assert_eq!(items.length().unwrap(), dict.len());
    }
}

// =============================================================================
// Ordering consistent with equality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// cmp == Equal exactly when ==
    #[test]
    fn ord_agrees_with_eq(a in value(), b in value()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    }

    /// Ordering is antisymmetric
    #[test]
    fn ord_is_antisymmetric(a in value(), b in value()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// A value equals its clone and is eqv to it
    #[test]
    fn clone_is_equal_and_eqv(a in value()) {
        let b = a.clone();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.eqv(&b));
    }
}
