//! Fuzz target for the canonical notation.
//!
//! Goal: flattening **never panics**, and reversing every list and mapping
//! leaves the notation unchanged.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_notation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use canonsig::{Value, notation, signature};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Input {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    List(Vec<Input>),
    Mapping(Vec<(Input, Input)>),
}

fn build(input: &Input, reverse: bool) -> Value {
    match input {
        Input::Text(s) => Value::from(s.as_str()),
        Input::Integer(n) => Value::from(*n),
        Input::Float(f) => Value::from(*f),
        Input::Boolean(b) => Value::from(*b),
        Input::Null => Value::Null,
        Input::List(items) => {
            let mut out: Vec<Value> = items.iter().map(|i| build(i, reverse)).collect();
            if reverse {
                out.reverse();
            }
            Value::List(out)
        }
        Input::Mapping(pairs) => {
            let mut out: Vec<(Value, Value)> = pairs
                .iter()
                .map(|(k, v)| (build(k, reverse), build(v, reverse)))
                .collect();
            if reverse {
                out.reverse();
            }
            Value::mapping(out)
        }
    }
}

fuzz_target!(|input: Input| {
    let forward = build(&input, false);
    let Ok(expected) = notation(&forward) else {
        return;
    };
    let _ = signature(&forward);

    // Duplicate keys resolve differently once reversed; only compare
    // when dedupe did not drop anything.
    if has_duplicate_keys(&input) {
        return;
    }
    let backward = build(&input, true);
    assert_eq!(notation(&backward).ok(), Some(expected));
});

fn has_duplicate_keys(input: &Input) -> bool {
    match input {
        Input::List(items) => items.iter().any(has_duplicate_keys),
        Input::Mapping(pairs) => {
            let keys: Vec<Value> = pairs.iter().map(|(k, _)| build(k, false)).collect();
            keys.iter()
                .enumerate()
                .any(|(i, k)| keys[..i].contains(k))
                || pairs
                    .iter()
                    .any(|(k, v)| has_duplicate_keys(k) || has_duplicate_keys(v))
        }
        _ => false,
    }
}
