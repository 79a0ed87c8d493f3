//! Single-character discriminators embedded in the notation.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeFlag {
    Text,
    Number,
    Boolean,
    Null,
    List,
    Mapping,
}

impl TypeFlag {
    pub fn as_char(self) -> char {
        match self {
            TypeFlag::Text => 'S',
            TypeFlag::Number => 'N',
            TypeFlag::Boolean => 'B',
            TypeFlag::Null => '_',
            TypeFlag::List => 'A',
            TypeFlag::Mapping => 'H',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeFlag::Text => "S",
            TypeFlag::Number => "N",
            TypeFlag::Boolean => "B",
            TypeFlag::Null => "_",
            TypeFlag::List => "A",
            TypeFlag::Mapping => "H",
        }
    }
}

impl fmt::Display for TypeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
