//! JSON call descriptions
//!
//! ```json
//! {
//!   "name": "baz",
//!   "types": [{"uint": 32}, "bool"],
//!   "values": [69, true]
//! }
//! ```
//!
//! Values are read according to their paired type: integers as JSON numbers
//! or decimal/`0x` hex strings, `bytes` as hex strings, `address` as a
//! 20-byte hex string,
//! `string` as a JSON string, tuples and arrays as JSON arrays.

use std::io::Read;
use std::path::Path;

use bach_abi::{strip_hex_prefix, AbiError, Address, CallDescriptor, ParamType, Value, U256};
use serde::Deserialize;
use serde_json::Value as Json;

use crate::CliError;

/// A call description as read from disk or stdin
#[derive(Debug, Deserialize)]
pub struct CallFile {
    /// Function name and argument types
    #[serde(flatten)]
    pub call: CallDescriptor,
    /// Positional argument values
    #[serde(default)]
    pub values: Vec<Json>,
}

impl CallFile {
    /// Read from `path`, or from stdin when `path` is `-`
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = if path == Path::new("-") {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        } else {
            std::fs::read_to_string(path)?
        };
        Self::parse(&content)
    }

    /// Parse from a JSON string
    pub fn parse(content: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Convert the JSON values into typed ABI values
    pub fn values(&self) -> Result<Vec<Value>, CliError> {
        to_values(self.call.types(), &self.values)
    }
}

fn to_values(types: &[ParamType], items: &[Json]) -> Result<Vec<Value>, CliError> {
    if types.len() != items.len() {
        return Err(AbiError::ArityMismatch {
            expected: types.len(),
            got: items.len(),
        }
        .into());
    }
    types
        .iter()
        .zip(items)
        .map(|(param_type, json)| to_value(param_type, json))
        .collect()
}

/// Convert one JSON value into an ABI value for `param_type`
pub fn to_value(param_type: &ParamType, json: &Json) -> Result<Value, CliError> {
    match (param_type, json) {
        (ParamType::Bool, Json::Bool(flag)) => Ok(Value::Bool(*flag)),
        (ParamType::Uint(_) | ParamType::Address, Json::Number(n)) => n
            .as_u64()
            .map(Value::from)
            .ok_or_else(|| mismatch(param_type, json)),
        (ParamType::Uint(_), Json::String(s)) => parse_uint(s),
        (ParamType::Address, Json::String(s)) => Ok(Address::from_hex(s)?.into()),
        (ParamType::Bytes | ParamType::FixedBytes(_), Json::String(s)) => {
            Ok(Value::Bytes(decode_hex(s)?))
        }
        (ParamType::String, Json::String(s)) => Ok(Value::string(s)),
        (ParamType::Tuple(types), Json::Array(items)) => Ok(Value::Tuple(to_values(types, items)?)),
        (ParamType::FixedArray(inner, _) | ParamType::Array(inner), Json::Array(items)) => {
            let values = items
                .iter()
                .map(|item| to_value(inner, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Seq(values))
        }
        _ => Err(mismatch(param_type, json)),
    }
}

fn parse_uint(s: &str) -> Result<Value, CliError> {
    if strip_hex_prefix(s).len() != s.len() {
        return Ok(Value::Bytes(decode_hex(s)?));
    }
    U256::from_dec_str(s)
        .map(Value::Int)
        .map_err(|_| CliError::InvalidInput(format!("invalid decimal integer: {}", s)))
}

/// Decode hex with or without 0x/0X prefix; odd lengths get a leading zero
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let s = strip_hex_prefix(s);
    if s.len() % 2 == 1 {
        return Ok(hex::decode(format!("0{}", s))?);
    }
    Ok(hex::decode(s)?)
}

fn mismatch(param_type: &ParamType, json: &Json) -> CliError {
    CliError::InvalidInput(format!("expected {} value, got {}", param_type, json))
}
