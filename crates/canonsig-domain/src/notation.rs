//! Flattening of an annotated tree into its notation.
//!
//! Pre-order, depth first: a leaf emits its payload then its flag; a
//! container emits each child in canonical order, then its own flag. Tokens
//! are concatenated with no separators. Null has an empty payload, so only
//! `_` appears.

use crate::annotate::{Annotated, annotate};
use canonsig_types::{ToValue, TypeMismatch};

pub fn notation<T: ToValue + ?Sized>(input: &T) -> Result<String, TypeMismatch> {
    Ok(flatten(&annotate(input)?))
}

pub fn flatten(node: &Annotated) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Annotated, out: &mut String) {
    match node {
        Annotated::Text(s) => out.push_str(s),
        Annotated::Number(n) => out.push_str(&n.canonical()),
        Annotated::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Annotated::Null => {}
        Annotated::List(children) | Annotated::Mapping(children) => {
            for child in children {
                write_node(child, out);
            }
        }
    }
    out.push(node.flag().as_char());
}
