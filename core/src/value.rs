//! Value types for fuzzable elements.
//!
//! A value is the semantic content of an element before encoding, and also
//! what the encode step produces. Scalars (Bool, Int, String) and raw Bytes
//! cover the primitive variants; List covers composite renderings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A semantic value held or rendered by an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// No value. Renders to zero bytes.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// Get as byte slice if this is a Bytes value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Bytes(_) => "Bytes",
            Value::String(_) => "String",
            Value::List(_) => "List",
        }
    }

    /// Flatten into the bytes this value puts on the wire.
    ///
    /// Null is empty, strings are their UTF-8 encoding and lists concatenate
    /// their items. Bool and Int have no canonical byte form (width and
    /// endianness belong to the element that encodes them), so they yield
    /// `None`, as does any list containing one.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Value::Null => Some(Vec::new()),
            Value::Bytes(b) => Some(b.clone()),
            Value::String(s) => Some(s.as_bytes().to_vec()),
            Value::List(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend(item.to_bytes()?);
                }
                Some(out)
            }
            Value::Bool(_) | Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Bytes(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
