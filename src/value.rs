//! Attribute values supplied by the host at invocation time.

use std::collections::HashMap;
use std::fmt;

/// Values passed to a single `execute` call, keyed by attribute name.
pub type Values = HashMap<String, Value>;

/// Semantic type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// A single string
    Str,
    /// An ordered sequence of strings
    StrList,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => f.write_str("Str"),
            Self::StrList => f.write_str("StrList"),
        }
    }
}

/// A concrete attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Str(String),
    StrList(Vec<String>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Str(..) => ValueType::Str,
            Self::StrList(..) => ValueType::StrList,
        }
    }

    /// Returns the string, or `None` if this is not a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::StrList(..) => None,
        }
    }

    /// Returns the list, or `None` if this is not a [`Value::StrList`].
    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Self::StrList(values) => Some(values),
            Self::Str(..) => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::StrList(values)
    }
}
