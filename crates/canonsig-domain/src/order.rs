//! Sort keys for the canonical order.
//!
//! Every node carries a `display` key computed bottom-up alongside its
//! annotation: raw text for strings, canonical decimal for numbers, fixed
//! literals for booleans, empty for null, and the `inspect` form for
//! containers. Inside a container, children contribute their `inspect` form,
//! where text is quoted and null is spelled out so nested keys stay
//! injective. Siblings sort by `(display, flag)`; the flag only breaks ties
//! between different kinds with equal text (`1` vs `"1"`), so a tie that
//! survives both is between content-equal values.

use crate::annotate::Annotated;
use std::cmp::Ordering;

pub(crate) struct Keyed {
    pub node: Annotated,
    pub display: String,
}

impl Keyed {
    pub fn inspect(&self) -> String {
        match &self.node {
            Annotated::Text(s) => quote(s),
            Annotated::Null => "null".to_string(),
            _ => self.display.clone(),
        }
    }
}

pub(crate) fn compare(a: &Keyed, b: &Keyed) -> Ordering {
    a.display
        .cmp(&b.display)
        .then_with(|| a.node.flag().as_char().cmp(&b.node.flag().as_char()))
}

/// Stable: equal keys keep their input order.
pub(crate) fn sort(mut items: Vec<Keyed>) -> Vec<Keyed> {
    items.sort_by(compare);
    items
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
