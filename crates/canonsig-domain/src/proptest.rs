//! Property-based tests for the encoder.
//!
//! These tests use proptest to verify invariants around:
//! - Order independence of lists and mappings at every depth
//! - Determinism of notation and signature
//! - Type flags separating values with equal text

use crate::annotate::annotate;
use crate::fingerprint::{DigestAlgorithm, signature, signature_with};
use crate::notation::notation;
use crate::test_support::permute;
use canonsig_types::{Number, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Short text drawn from a small alphabet so collisions between siblings are likely.
fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c1-3 \"\\\\å]{0,3}").unwrap()
}

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-5i64..5).prop_map(Number::from),
        any::<i64>().prop_map(Number::from),
        any::<u128>().prop_map(Number::from),
        (-100.0f64..100.0).prop_map(Number::from),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_text().prop_map(Value::Text),
        arb_number().prop_map(Value::Number),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Null),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
            prop::collection::vec((inner.clone(), inner), 0..4).prop_map(Value::mapping),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn notation_ignores_order_at_every_depth(v in arb_value(), salt in any::<u64>()) {
        let shuffled = permute(&v, salt);
        prop_assert_eq!(notation(&v).unwrap(), notation(&shuffled).unwrap());
        prop_assert_eq!(annotate(&v).unwrap(), annotate(&shuffled).unwrap());
    }

    #[test]
    fn top_level_shuffle_keeps_signature(items in prop::collection::vec(arb_value(), 0..6)
        .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle())))
    {
        let (original, shuffled) = items;
        prop_assert_eq!(
            signature(&Value::List(original)).unwrap(),
            signature(&Value::List(shuffled)).unwrap()
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical(v in arb_value()) {
        let first = notation(&v).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(&notation(&v).unwrap(), &first);
        }
        for alg in DigestAlgorithm::ALL {
            prop_assert_eq!(signature_with(&v, &alg).unwrap(), signature_with(&v, &alg).unwrap());
        }
    }

    #[test]
    fn text_never_collides_with_other_kinds(s in arb_text(), n in arb_number(), b in any::<bool>()) {
        let t = notation(&Value::Text(s)).unwrap();
        prop_assert_ne!(&t, &notation(&Value::Number(n)).unwrap());
        prop_assert_ne!(&t, &notation(&Value::Boolean(b)).unwrap());
        prop_assert_ne!(&t, &notation(&Value::Null).unwrap());
    }

    #[test]
    fn set_and_list_agree(items in prop::collection::vec(arb_value(), 0..6)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(
            signature(&Value::from_set(items)).unwrap(),
            signature(&Value::List(reversed)).unwrap()
        );
    }

    #[test]
    fn mapping_differs_from_list_of_its_pairs(pairs in prop::collection::vec((arb_leaf(), arb_leaf()), 1..4)) {
        let mapping = Value::mapping(pairs);
        let Value::Mapping(entries) = &mapping else { unreachable!() };
        let as_list = Value::List(
            entries.iter().map(|(k, v)| Value::List(vec![k.clone(), v.clone()])).collect(),
        );
        prop_assert_ne!(notation(&mapping).unwrap(), notation(&as_list).unwrap());
    }

    #[test]
    fn notation_ends_with_top_level_flag(v in arb_value()) {
        let n = notation(&v).unwrap();
        let last = n.chars().last();
        prop_assert_eq!(last, Some(v.flag().as_char()));
    }
}
