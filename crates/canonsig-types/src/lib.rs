//! Stable value model shared across the canonsig workspace.
//!
//! This crate is intentionally boring:
//! - the closed six-variant `Value` tree the encoder consumes
//! - arbitrary-magnitude `Number` with a canonical decimal form
//! - single-character type flags
//! - coercion of host data (std collections, JSON, TOML, `Serialize`) into `Value`

#![forbid(unsafe_code)]

pub mod convert;
pub mod error;
pub mod flag;
pub mod number;
pub mod ser;
pub mod value;

pub use convert::ToValue;
pub use error::{InvalidNumber, SerializeError, TypeMismatch};
pub use flag::TypeFlag;
pub use number::Number;
pub use ser::to_value;
pub use value::Value;
