//! Coercion of host data into `Value`.
//!
//! `ToValue` is the seam between callers' data and the encoder. A `Value`
//! converts by borrowing; everything else builds an owned tree. Conversion is
//! all-or-nothing: the first unsupported node fails the whole call.

use crate::error::TypeMismatch;
use crate::number::Number;
use crate::value::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

pub trait ToValue {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch>;
}

fn owned(v: Value) -> Result<Cow<'static, Value>, TypeMismatch> {
    Ok(Cow::Owned(v))
}

fn list<'a, T, I>(items: I) -> Result<Cow<'static, Value>, TypeMismatch>
where
    T: ToValue + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items = items
        .into_iter()
        .map(|item| item.to_value().map(Cow::into_owned))
        .collect::<Result<Vec<_>, _>>()?;
    owned(Value::List(items))
}

fn mapping<'a, K, V, I>(pairs: I) -> Result<Cow<'static, Value>, TypeMismatch>
where
    K: ToValue + ?Sized + 'a,
    V: ToValue + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let pairs = pairs
        .into_iter()
        .map(|(k, v)| Ok((k.to_value()?.into_owned(), v.to_value()?.into_owned())))
        .collect::<Result<Vec<_>, TypeMismatch>>()?;
    owned(Value::Mapping(pairs))
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        (**self).to_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(Value::Text(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(Value::Text(self.clone()))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(Value::Text(self.to_string()))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(Value::Boolean(*self))
    }
}

impl ToValue for Number {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(Value::Number(self.clone()))
    }
}

macro_rules! impl_to_value_numeric {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
                    owned(Value::Number(Number::from(*self)))
                }
            }
        )*
    };
}

impl_to_value_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        match self {
            Some(v) => v.to_value(),
            None => owned(Value::Null),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        list(self.iter())
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        mapping(self.iter())
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        mapping(self.iter())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        owned(from_json(self))
    }
}

fn from_json(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(json_number(n)),
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| (Value::Text(k.clone()), from_json(v)))
                .collect(),
        ),
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::from(i)
    } else if let Some(u) = n.as_u64() {
        Number::from(u)
    } else {
        // With `arbitrary_precision` the literal text survives parsing, so
        // integers past u64 keep every digit.
        Number::from_json_text(&n.to_string()).unwrap_or_else(|| Number::from_f64(f64::NAN))
    }
}

impl ToValue for toml::Value {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        from_toml(self).map(Cow::Owned)
    }
}

impl ToValue for toml::Table {
    fn to_value(&self) -> Result<Cow<'_, Value>, TypeMismatch> {
        toml_table(self).map(Cow::Owned)
    }
}

fn from_toml(v: &toml::Value) -> Result<Value, TypeMismatch> {
    Ok(match v {
        toml::Value::String(s) => Value::Text(s.clone()),
        toml::Value::Integer(i) => Value::Number(Number::from(*i)),
        toml::Value::Float(f) => Value::Number(Number::from_f64(*f)),
        toml::Value::Boolean(b) => Value::Boolean(*b),
        toml::Value::Datetime(_) => return Err(TypeMismatch::new("datetime")),
        toml::Value::Array(items) => {
            Value::List(items.iter().map(from_toml).collect::<Result<_, _>>()?)
        }
        toml::Value::Table(table) => toml_table(table)?,
    })
}

fn toml_table(table: &toml::Table) -> Result<Value, TypeMismatch> {
    let pairs = table
        .iter()
        .map(|(k, v)| Ok((Value::Text(k.clone()), from_toml(v)?)))
        .collect::<Result<Vec<_>, TypeMismatch>>()?;
    Ok(Value::Mapping(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_converts_by_borrowing() {
        let v = Value::from("a");
        assert!(matches!(v.to_value().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn sets_convert_to_lists() {
        let set: BTreeSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(
            set.to_value().unwrap().into_owned(),
            Value::List(vec![Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn maps_convert_to_mappings() {
        let mut m = BTreeMap::new();
        m.insert("a", vec![1, 2]);
        assert_eq!(
            m.to_value().unwrap().into_owned(),
            Value::Mapping(vec![(
                Value::from("a"),
                Value::List(vec![Value::from(1), Value::from(2)])
            )])
        );
    }

    #[test]
    fn json_tree_converts_losslessly() {
        let doc = json!({"a": [1, 2.5, null, true], "b": "x", "c": u64::MAX});
        let v = doc.to_value().unwrap().into_owned();
        let Value::Mapping(pairs) = v else {
            panic!("expected mapping");
        };
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&(
            Value::from("a"),
            Value::List(vec![
                Value::from(1),
                Value::from(2.5),
                Value::Null,
                Value::from(true)
            ])
        )));
        assert!(pairs.contains(&(Value::from("c"), Value::from(u64::MAX))));
    }

    #[test]
    fn json_bignums_keep_every_digit() {
        let a: serde_json::Value =
            serde_json::from_str("123456789012345678901234567890123456789012").unwrap();
        let b: serde_json::Value =
            serde_json::from_str("123456789012345678901234567890123456789013").unwrap();
        let built = Value::Number("123456789012345678901234567890123456789012".parse().unwrap());

        assert_eq!(a.to_value().unwrap().into_owned(), built);
        assert_ne!(a.to_value().unwrap(), b.to_value().unwrap());

        let negative: serde_json::Value = serde_json::from_str("-98765432109876543210").unwrap();
        assert_eq!(
            negative.to_value().unwrap().into_owned(),
            Value::Number("-98765432109876543210".parse().unwrap())
        );
    }

    #[test]
    fn json_fractions_and_exponents_are_floats() {
        let doc: serde_json::Value = serde_json::from_str("[1.50, 1E2, 2.5e-7]").unwrap();
        assert_eq!(
            doc.to_value().unwrap().into_owned(),
            Value::List(vec![Value::from(1.5), Value::from(100.0), Value::from(2.5e-7)])
        );
    }

    #[test]
    fn toml_datetime_is_a_type_mismatch() {
        let table: toml::Table = toml::from_str("a = 1\n[nested]\nwhen = 1979-05-27T07:32:00Z\n")
            .expect("valid toml");
        let err = table.to_value().unwrap_err();
        assert_eq!(err, TypeMismatch::new("datetime"));
    }

    #[test]
    fn toml_without_datetimes_converts() {
        let table: toml::Table = toml::from_str("name = \"x\"\nratio = 0.5\ntags = [\"a\", \"b\"]\n")
            .expect("valid toml");
        let Value::Mapping(pairs) = table.to_value().unwrap().into_owned() else {
            panic!("expected mapping");
        };
        assert!(pairs.contains(&(Value::from("ratio"), Value::from(0.5))));
    }

    #[test]
    fn option_and_nested_references_convert() {
        let inner = vec![Some("a"), None];
        let outer = [&inner];
        assert_eq!(
            outer.to_value().unwrap().into_owned(),
            Value::List(vec![Value::List(vec![Value::from("a"), Value::Null])])
        );
    }
}
