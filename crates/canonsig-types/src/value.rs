use crate::flag::TypeFlag;
use crate::number::Number;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A semi-structured value: the closed input contract of the encoder.
///
/// `List` and `Mapping` are ordered containers, but their order carries no
/// meaning for fingerprinting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Number(Number),
    Boolean(bool),
    #[default]
    Null,
    List(Vec<Value>),
    /// Key/value pairs with keys unique by equality.
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    /// Symbolic (interned) text is fingerprinted as its textual content.
    pub fn from_symbol(symbol: impl AsRef<str>) -> Self {
        Value::Text(symbol.as_ref().to_string())
    }

    /// A set is fingerprinted as a list of its elements.
    pub fn from_set<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(elements.into_iter().collect())
    }

    /// Build a mapping, keeping keys unique.
    ///
    /// A repeated key replaces the earlier value in its original position.
    pub fn mapping<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        let mut index: HashMap<Value, usize> = HashMap::new();
        for (k, v) in pairs {
            match index.entry(k) {
                Entry::Occupied(slot) => out[*slot.get()].1 = v,
                Entry::Vacant(slot) => {
                    out.push((slot.key().clone(), v));
                    slot.insert(out.len() - 1);
                }
            }
        }
        Value::Mapping(out)
    }

    pub fn flag(&self) -> TypeFlag {
        match self {
            Value::Text(_) => TypeFlag::Text,
            Value::Number(_) => TypeFlag::Number,
            Value::Boolean(_) => TypeFlag::Boolean,
            Value::Null => TypeFlag::Null,
            Value::List(_) => TypeFlag::List,
            Value::Mapping(_) => TypeFlag::Mapping,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

macro_rules! impl_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}
