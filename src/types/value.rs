//! Primitive metadata value types.

use std::convert::TryFrom;

pub use rust_decimal::Decimal;

use serde::Deserialize;
use serde::Serialize;
use strum::{AsRefStr, EnumDiscriminants};
use thiserror::Error;

use crate::types::Mapping;

#[derive(Debug, Error, Copy, Clone, PartialEq, Hash)]
pub enum Error {
    #[error("cannot convert value of kind {} into target type", .0.as_ref())]
    CannotConvert(ValueKind),
}

pub type Sequence = Vec<Value>;

/// A single field of deserialized EPLAN project metadata.
///
/// EPLAN exports carry no schema, so every field is one of a handful of
/// scalar shapes, a sequence, or a nested mapping of further fields. The
/// untagged representation lets a JSON or YAML dump deserialize directly
/// into this tree.
#[derive(Debug, Clone, Deserialize, Serialize, EnumDiscriminants)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(untagged)]
#[strum_discriminants(name(ValueKind), derive(Hash, AsRefStr))]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Decimal(Decimal),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Given a list of keys, looks up the subvalue at that key path of this value.
    /// This only works if this value is a mapping.
    pub fn get_path<S: AsRef<str>>(&self, key_path: &[S]) -> Option<&Self> {
        let mut curr_val = self;

        for key in key_path {
            match curr_val {
                Self::Mapping(map) => {
                    // If the current key is found in this mapping, descend into it.
                    curr_val = map.get(key.as_ref())?;
                },

                // An attempt was made to get the key of a non-mapping, short circuit.
                _ => return None,
            }
        }

        Some(curr_val)
    }
}

#[cfg(test)]
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.kind())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for &'k str {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(ref s) => Ok(s),
            _ => Err(Error::CannotConvert(value.kind())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(Error::CannotConvert(value.kind())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(Error::CannotConvert(value.kind())),
        }
    }
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Decimal(d) => Ok(d),
            _ => Err(Error::CannotConvert(value.kind())),
        }
    }
}
