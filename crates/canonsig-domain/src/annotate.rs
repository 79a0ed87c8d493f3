//! The canonical encoder.
//!
//! `annotate` walks a value tree post-order: children are annotated and
//! keyed before their parent sorts them, so the key a container contributes
//! to its own parent is already independent of input order. A mapping is
//! encoded as the list of its `[key, value]` pairs, flagged `H` instead of
//! `A`; each pair is itself canonicalized like any two-element list.

use crate::order::{self, Keyed};
use canonsig_types::{Number, ToValue, TypeFlag, TypeMismatch, Value};
use log::debug;
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A value paired with its type flag, children in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotated {
    Text(String),
    Number(Number),
    Boolean(bool),
    Null,
    List(Vec<Annotated>),
    /// Entries are two-element `List` nodes holding a key and its value.
    Mapping(Vec<Annotated>),
}

impl Annotated {
    pub fn flag(&self) -> TypeFlag {
        match self {
            Annotated::Text(_) => TypeFlag::Text,
            Annotated::Number(_) => TypeFlag::Number,
            Annotated::Boolean(_) => TypeFlag::Boolean,
            Annotated::Null => TypeFlag::Null,
            Annotated::List(_) => TypeFlag::List,
            Annotated::Mapping(_) => TypeFlag::Mapping,
        }
    }

    /// Child nodes in canonical order; empty for leaves.
    pub fn children(&self) -> &[Annotated] {
        match self {
            Annotated::List(children) | Annotated::Mapping(children) => children,
            _ => &[],
        }
    }
}

/// Serializes as the nested `[payload, "F"]` form.
impl Serialize for Annotated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        match self {
            Annotated::Text(s) => tuple.serialize_element(s)?,
            Annotated::Number(n) => tuple.serialize_element(n)?,
            Annotated::Boolean(b) => tuple.serialize_element(b)?,
            Annotated::Null => tuple.serialize_element(&None::<()>)?,
            Annotated::List(children) | Annotated::Mapping(children) => {
                tuple.serialize_element(children)?
            }
        }
        tuple.serialize_element(&self.flag())?;
        tuple.end()
    }
}

pub fn annotate<T: ToValue + ?Sized>(input: &T) -> Result<Annotated, TypeMismatch> {
    let value = input.to_value().inspect_err(|err| debug!("rejected input: {err}"))?;
    Ok(canonicalize(&value).node)
}

pub(crate) fn canonicalize(value: &Value) -> Keyed {
    match value {
        Value::Text(s) => Keyed {
            node: Annotated::Text(s.clone()),
            display: s.clone(),
        },
        Value::Number(n) => Keyed {
            node: Annotated::Number(n.clone()),
            display: n.canonical(),
        },
        Value::Boolean(b) => Keyed {
            node: Annotated::Boolean(*b),
            display: b.to_string(),
        },
        Value::Null => Keyed {
            node: Annotated::Null,
            display: String::new(),
        },
        Value::List(items) => {
            let children = order::sort(items.iter().map(canonicalize).collect());
            let display = format!("[{}]", join_inspect(&children));
            Keyed {
                node: Annotated::List(children.into_iter().map(|k| k.node).collect()),
                display,
            }
        }
        Value::Mapping(pairs) => {
            let mut entries: Vec<Entry> = pairs
                .iter()
                .map(|(k, v)| Entry::new(canonicalize(k), canonicalize(v)))
                .collect();
            // Every entry is an `A` node, so the pair key alone orders them.
            entries.sort_by(|a, b| a.key.cmp(&b.key));

            let display = format!(
                "{{{}}}",
                entries
                    .iter()
                    .map(|e| e.inspect.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Keyed {
                node: Annotated::Mapping(entries.into_iter().map(|e| e.node).collect()),
                display,
            }
        }
    }
}

fn join_inspect(children: &[Keyed]) -> String {
    children
        .iter()
        .map(Keyed::inspect)
        .collect::<Vec<_>>()
        .join(", ")
}

struct Entry {
    /// `[key, value]` before the pair itself is canonicalized.
    key: String,
    /// `key => value`, as the entry appears in the mapping's own key.
    inspect: String,
    node: Annotated,
}

impl Entry {
    fn new(key: Keyed, value: Keyed) -> Self {
        let (k, v) = (key.inspect(), value.inspect());
        let pair = order::sort(vec![key, value]);
        Entry {
            key: format!("[{k}, {v}]"),
            inspect: format!("{k} => {v}"),
            node: Annotated::List(pair.into_iter().map(|p| p.node).collect()),
        }
    }
}
