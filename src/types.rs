//! Core value model for sequence processing.
//!
//! Sequences handled by this crate are plain slices. Homogeneous sequences
//! use any element type directly; heterogeneous sequences use [`Value`], a
//! dynamically typed element whose runtime type is inspected via
//! [`Value::data_type`] and matched against a [`DataType`] tag.

use std::str::FromStr;

use crate::error::SequenceError;

/// Runtime type tag for a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// Parse a type tag from a string name (case-insensitive).
    ///
    /// Accepted names and synonyms:
    ///
    /// - `null`
    /// - `bool`, `boolean`
    /// - `int64`, `int`, `integer`
    /// - `float64`, `float`, `double`
    /// - `utf8`, `string`, `str`
    ///
    /// The tag `number` is rejected: it names two categories at once
    /// ([`DataType::Int64`] and [`DataType::Float64`]). To select the whole
    /// numeric category, use [`Value::is_numeric`] with
    /// [`crate::processing::map_if`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "null" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Bool),
            "int64" | "int" | "integer" => Some(Self::Int64),
            "float64" | "float" | "double" => Some(Self::Float64),
            "utf8" | "string" | "str" => Some(Self::Utf8),
            _ => None,
        }
    }
}

impl FromStr for DataType {
    type Err = SequenceError;

    /// Like [`DataType::from_tag`], but unknown tags surface as
    /// [`SequenceError::UnknownTypeTag`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| SequenceError::UnknownTypeTag { raw: s.to_string() })
    }
}

/// A single dynamically typed sequence element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// The runtime type tag of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Int64(_) => DataType::Int64,
            Value::Float64(_) => DataType::Float64,
            Value::Bool(_) => DataType::Bool,
            Value::Utf8(_) => DataType::Utf8,
        }
    }

    /// Whether this value is numeric ([`Value::Int64`] or [`Value::Float64`]).
    ///
    /// Dynamically typed inputs often treat all numbers as one category;
    /// in this model that category spans two tags, so it is matched with a
    /// predicate rather than a single [`DataType`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int64(_) | Value::Float64(_))
    }
}
