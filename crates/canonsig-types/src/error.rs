use thiserror::Error;

/// A value that is not one of text, number, boolean, null, list or mapping.
///
/// Raised the moment such a value is met anywhere in the input tree. There is
/// no partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected a (text|number|boolean|null|list|mapping), got {type_name}")]
pub struct TypeMismatch {
    pub type_name: String,
}

impl TypeMismatch {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// Text that is not an integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid integer literal: {0:?}")]
pub struct InvalidNumber(pub String);

/// Failure while turning a `Serialize` type into a `Value`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializeError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// Raised by the value's own `Serialize` impl.
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for SerializeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        SerializeError::Custom(msg.to_string())
    }
}
