// pmx-convert - Integration tests for Pmc/Pmt conversion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

mod common;

use std::sync::Arc;

use common::*;
use pmx_convert::{
    AritySpec, Classify, Kind, ToPmc, ToPmt, get_convert_depth, pmt_list_to_pmc_set,
    set_max_convert_depth,
};
use pmx_pmt::PmtDict;

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn test_bool_string_pair() {
    let pair = Pmc::pair(Pmc::Bool(true), Pmc::from("hello"));
    let pmt = pair.to_pmt().unwrap();

    assert!(pmt.is_pair());
    assert_eq!(pmt.car().unwrap(), &Pmt::from_bool(true));
    assert_eq!(pmt.cdr().unwrap(), &Pmt::symbol("hello"));
    assert_eq!(pmt.to_string(), "(#t . hello)");

    assert_eq!(pmt.to_pmc().unwrap(), pair);
}

#[test]
fn test_u8_array() {
    let array = Pmc::array(vec![1u8, 2, 3]);
    let pmt = array.to_pmt().unwrap();

    assert_eq!(pmt.type_name(), "u8vector");
    assert_eq!(pmt.length().unwrap(), 3);
    assert_eq!(pmt.uniform_elements::<u8>().unwrap(), vec![1, 2, 3]);

    assert_eq!(pmt.to_pmc().unwrap().as_array::<u8>().unwrap(), &[1u8, 2, 3][..]);
}

#[test]
fn test_custom_object_keeps_identity() {
    struct Antenna {
        gain_db: f32,
    }

    let original = Arc::new(Antenna { gain_db: 3.5 });
    let wrapped = Pmc::Any(pmx_convert::PmcAny::from_arc(original.clone()));

    let pmt = wrapped.to_pmt().unwrap();
    assert_eq!(pmt.classify(), Kind::Opaque);

    let back = pmt.to_pmc().unwrap();
    let any = back.as_any().unwrap();
    let antenna = any.downcast_ref::<Antenna>().unwrap();
    assert_eq!(antenna.gain_db, 3.5);
    assert!(std::ptr::eq(antenna, Arc::as_ptr(&original)));
}

// =============================================================================
// Opaque passthrough
// =============================================================================

#[test]
fn test_pmt_opaque_round_trip_without_double_wrap() {
    let payload = Pmt::any(vec![0xdeu8, 0xad]);
    let as_pmc = payload.to_pmc().unwrap();
    // One level of wrapping on the Pmc side
    assert!(as_pmc.as_any().unwrap().is::<Pmt>());

    let back = as_pmc.to_pmt().unwrap();
    assert!(back.eqv(&payload));
    assert!(back.any_ref().unwrap().is::<Vec<u8>>());
}

#[test]
fn test_pmc_opaque_round_trip_without_double_wrap() {
    let payload = Pmc::any(String::from("not a symbol"));
    let as_pmt = payload.to_pmt().unwrap();
    let back = as_pmt.to_pmc().unwrap();
    assert_eq!(back, payload);
    assert!(back.as_any().unwrap().is::<String>());

    // Going round again still does not nest
    let again = back.to_pmt().unwrap().to_pmc().unwrap();
    assert_eq!(again, payload);
}

#[test]
fn test_empty_list_round_trips_as_opaque() {
    let back = pmt_round_trip(&Pmt::Nil).unwrap();
    assert!(back.is_nil());
}

// =============================================================================
// Integer narrowing
// =============================================================================

#[test]
fn test_narrow_kinds_collapse_to_i32() {
    for value in [Pmc::I8(-3), Pmc::I16(-3), Pmc::I32(-3)] {
        assert_eq!(pmc_round_trip(&value).unwrap(), Pmc::I32(-3));
    }
    for value in [Pmc::U8(200), Pmc::U16(200), Pmc::U32(200)] {
        assert_eq!(pmc_round_trip(&value).unwrap(), Pmc::I32(200));
    }
}

#[test]
fn test_u32_beyond_i32_is_truncated() {
    assert_eq!(
        pmc_round_trip(&Pmc::U32(u32::MAX)).unwrap(),
        Pmc::I32(-1)
    );
}

#[test]
fn test_wide_kinds_travel_as_uint64() {
    let pmt = pmc_to_pmt(&Pmc::I64(-2)).unwrap();
    assert!(pmt.is_uint64());
    assert_eq!(pmt_to_pmc(&pmt).unwrap(), Pmc::U64((-2i64) as u64));

    assert_eq!(
        pmc_round_trip(&Pmc::U64(u64::MAX)).unwrap(),
        Pmc::U64(u64::MAX)
    );
}

// =============================================================================
// Tuples
// =============================================================================

#[test]
fn test_tuple_arities_round_trip() {
    for arity in [0, 1, 5, 10] {
        let tuple = PmcTuple::new(counting_tuple(arity)).unwrap();
        assert_pmc_round_trip!(Pmc::Tuple(tuple));
    }
}

#[test]
fn test_eleven_element_tuple_is_rejected() {
    let eleven = Pmt::tuple((0..11).map(Pmt::from_long).collect());
    assert_eq!(
        pmt_to_pmc(&eleven),
        Err(Error::ArityError {
            expected: AritySpec::Range(0, 10),
            got: 11,
        })
    );
    assert!(Pmc::tuple(counting_tuple(11)).is_err());
}

#[test]
fn test_tuple_as_array() {
    let pmt = Pmt::tuple(vec![Pmt::symbol("x"), Pmt::from_double(1.0)]);
    let pmc = pmt.to_pmc().unwrap();
    let [name, value] = pmc.as_tuple().unwrap().as_array::<2>().unwrap();
    assert_eq!(name, &Pmc::from("x"));
    assert_eq!(value, &Pmc::F64(1.0));
}

// =============================================================================
// Dictionaries
// =============================================================================

#[test]
fn test_dict_round_trip() {
    let d = Pmc::dict([
        (Pmc::from("freq"), Pmc::F64(2.4e9)),
        (Pmc::from("gain"), Pmc::I32(30)),
        (Pmc::from("tags"), Pmc::list(vec![Pmc::from("a"), Pmc::from("b")])),
    ]);
    assert_pmc_round_trip!(d);
}

#[test]
fn test_pmt_dict_source_untouched() {
    let dict = PmtDict::new()
        .add(Pmt::symbol("a"), Pmt::from_long(1))
        .add(Pmt::symbol("b"), Pmt::from_long(2));
    let source = Pmt::Dict(dict.clone());

    let pmc = source.to_pmc().unwrap();
    assert_eq!(pmc.as_dict().unwrap().len(), 2);
    assert!(source.as_dict().unwrap().ptr_eq(&dict));
    assert_eq!(source.length().unwrap(), 2);
}

#[test]
fn test_dict_key_coalescing() {
    // 1 and 2^32 + 1 are distinct Pmt keys but both narrow to I32(1)
    let dict = PmtDict::new()
        .add(Pmt::from_long(1), Pmt::symbol("small"))
        .add(Pmt::from_long((1 << 32) + 1), Pmt::symbol("large"));
    let pmc = pmt_to_pmc(&Pmt::Dict(dict)).unwrap();
    let map = pmc.as_dict().unwrap();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key(&Pmc::I32(1)));
}

// =============================================================================
// Sets
// =============================================================================

#[test]
fn test_set_becomes_list_and_cannot_come_back() {
    let set = Pmc::set([Pmc::from("x"), Pmc::from("y")]);
    let list = set.to_pmt().unwrap();
    assert!(list.is_proper_list());
    assert_eq!(list.to_string(), "(x y)");

    assert_eq!(
        pmt_list_to_pmc_set(&list),
        Err(Error::UnsupportedConversion {
            from: "list",
            to: "set"
        })
    );
}

// =============================================================================
// Numeric arrays
// =============================================================================

#[test]
fn test_every_array_type_round_trips() {
    for scalar in ScalarType::ALL {
        for len in [0, 1, 17] {
            let array = sample_array(scalar, len);
            let pmt = pmc_to_pmt(&Pmc::Array(array.clone())).unwrap();
            assert_eq!(pmt.length().unwrap(), len);
            assert_eq!(pmt.classify(), Kind::NumericArray(scalar));
            assert_eq!(pmt_to_pmc(&pmt).unwrap(), Pmc::Array(array));
        }
    }
}

#[test]
fn test_uniform_vector_round_trips_from_pmt_side() {
    let u = Pmt::init_uniform(&[i64::MIN, 0, i64::MAX]);
    let back = pmt_round_trip(&u).unwrap();
    assert_eq!(back, u);
    assert!(!back.eqv(&u), "conversion allocates fresh storage");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_poisoned_vector_is_malformed() {
    let v = Pmt::vector(vec![Pmt::from_long(1)]);
    let Pmt::Vector(cells) = &v else {
        unreachable!()
    };
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = cells.with_elements_mut::<()>(|_| panic!("writer died"));
    }));
    assert!(result.is_err());

    assert!(matches!(
        pmt_to_pmc(&v),
        Err(Error::MalformedValue { kind: "vector", .. })
    ));
}

#[test]
fn test_self_containing_vector_hits_depth_limit() {
    let v = Pmt::make_vector(1, Pmt::Null);
    v.vector_set(0, v.clone()).unwrap();

    let result = pmt_to_pmc(&v);
    assert!(matches!(result, Err(Error::DepthExceeded { max: 1000 })));
    assert_eq!(get_convert_depth(), 0);

    // Break the cycle so the storage is freed
    v.vector_set(0, Pmt::Null).unwrap();
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let nested = (0..990).fold(Pmc::Null, |inner, _| Pmc::list(vec![inner]));
    let pmt = pmc_to_pmt(&nested).unwrap();
    assert_eq!(pmt_to_pmc(&pmt).unwrap(), nested);

    let too_deep = Pmc::list(vec![(0..10).fold(nested, |inner, _| Pmc::list(vec![inner]))]);
    assert!(matches!(
        pmc_to_pmt(&too_deep),
        Err(Error::DepthExceeded { max: 1000 })
    ));
}

#[test]
fn test_depth_limit_is_configurable() {
    let nested = (0..20).fold(Pmc::Null, |inner, _| Pmc::list(vec![inner]));

    let previous = set_max_convert_depth(10);
    assert!(matches!(
        pmc_to_pmt(&nested),
        Err(Error::DepthExceeded { max: 10 })
    ));
    let _ = set_max_convert_depth(previous);

    assert!(pmc_to_pmt(&nested).is_ok());
}

#[test]
fn test_nested_failure_returns_no_partial_value() {
    let inner = Pmt::tuple(vec![Pmt::Null; 12]);
    let dict = PmtDict::new()
        .add(Pmt::symbol("ok"), Pmt::from_long(1))
        .add(Pmt::symbol("bad"), inner);
    assert!(matches!(
        pmt_to_pmc(&Pmt::Dict(dict)),
        Err(Error::ArityError { got: 12, .. })
    ));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_conversion_of_shared_source() {
    let source = Pmt::Dict(
        (0..64)
            .map(|i| {
                (
                    Pmt::from_long(i),
                    Pmt::list(vec![Pmt::symbol("n"), Pmt::from_double(i as f64)]),
                )
            })
            .collect(),
    );
    let expected = pmt_to_pmc(&source).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| pmt_to_pmc(&source).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
