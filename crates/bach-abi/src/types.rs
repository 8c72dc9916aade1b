//! ABI type descriptors and runtime values

use std::fmt;

use bach_abi_primitives::{Address, U256};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit width `address` is encoded with
pub const ADDRESS_BITS: usize = 160;

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamType {
    /// Address, encoded as `uint160`
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
    /// Tuple
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(types) => types.iter().any(|t| t.is_dynamic()),
            ParamType::Address | ParamType::Uint(_) | ParamType::Bool | ParamType::FixedBytes(_) => {
                false
            }
        }
    }

    /// Check if this type is static (fixed length)
    pub fn is_static(&self) -> bool {
        !self.is_dynamic()
    }

    /// Canonical textual form, as used in function signatures
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
            ParamType::Tuple(types) => {
                f.write_str("(")?;
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", t)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Runtime argument paired with a [`ParamType`] at encode time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer (also used for `address`)
    Int(U256),
    /// Boolean
    Bool(bool),
    /// Raw byte content: `bytes`, UTF-8 `string`, or a big-endian integer
    Bytes(Vec<u8>),
    /// Heterogeneous tuple
    Tuple(Vec<Value>),
    /// Homogeneous array
    Seq(Vec<Value>),
}

impl Value {
    /// Create an integer value from u128
    pub fn uint(value: u128) -> Self {
        Value::Int(U256::from(value))
    }

    /// Create a string value (stored as its UTF-8 bytes)
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Bytes(s.as_ref().as_bytes().to_vec())
    }

    /// Create a bytes value
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Create a tuple value
    pub fn tuple(values: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(values.into_iter().collect())
    }

    /// Create an array value
    pub fn seq(values: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(values.into_iter().collect())
    }

    /// Short name of this value's shape, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Bytes(_) => "bytes",
            Value::Tuple(_) => "tuple",
            Value::Seq(_) => "sequence",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(U256::from(value))
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::Bytes(data)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Address> for Value {
    fn from(addr: Address) -> Self {
        Value::Bytes(addr.as_bytes().to_vec())
    }
}
