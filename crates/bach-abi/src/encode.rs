//! ABI encoding

use bach_abi_crypto::{Hasher, Keccak256};
use bach_abi_primitives::{Word, U256};

use crate::call::CallDescriptor;
use crate::error::{AbiError, Result};
use crate::selector::resolve;
use crate::types::{ParamType, Value, ADDRESS_BITS};
use crate::util::{check_width, encode_unsigned, left_pad, right_pad, strip_leading_zeros};

/// Call-data encoder parameterised over the selector hash function
#[derive(Debug, Clone, Default)]
pub struct Encoder<H = Keccak256> {
    hasher: H,
}

impl Encoder<Keccak256> {
    /// Encoder using Keccak-256 selectors
    pub fn new() -> Self {
        Self { hasher: Keccak256 }
    }
}

impl<H: Hasher> Encoder<H> {
    /// Encoder using a custom hash function for selectors
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// The selector hash function
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// 4-byte selector for `call`, or empty when it has no name
    pub fn selector(&self, call: &CallDescriptor) -> Result<Vec<u8>> {
        resolve(call.name(), call.types(), &self.hasher)
    }

    /// Encode `values` against `call`: selector followed by the arguments
    pub fn encode(&self, values: &[Value], call: &CallDescriptor) -> Result<Vec<u8>> {
        check_arity(call.types().len(), values.len())?;

        let mut out = self.selector(call)?;
        out.extend(encode_sequence(call.types(), values)?);

        tracing::debug!(
            name = call.name().unwrap_or_default(),
            args = values.len(),
            len = out.len(),
            "encoded call data"
        );
        Ok(out)
    }
}

/// Positional reader over the values of one type list
struct ValueCursor<'a> {
    values: &'a [Value],
    position: usize,
}

impl<'a> ValueCursor<'a> {
    /// Fails up front unless exactly `expected` values are present
    fn new(values: &'a [Value], expected: usize) -> Result<Self> {
        check_arity(expected, values.len())?;
        Ok(Self {
            values,
            position: 0,
        })
    }

    fn next_value(&mut self) -> Result<&'a Value> {
        let value = self.values.get(self.position).ok_or(AbiError::ArityMismatch {
            expected: self.position + 1,
            got: self.values.len(),
        })?;
        self.position += 1;
        Ok(value)
    }
}

fn check_arity(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(AbiError::ArityMismatch { expected, got });
    }
    Ok(())
}

/// Concatenate the encodings of `values`, matched to `types` by position
pub fn encode_sequence(types: &[ParamType], values: &[Value]) -> Result<Vec<u8>> {
    let mut cursor = ValueCursor::new(values, types.len())?;
    let mut out = Vec::new();
    for param_type in types {
        out.extend(encode_type(param_type, cursor.next_value()?)?);
    }
    Ok(out)
}

/// Encode a single value against its declared type
pub fn encode_type(param_type: &ParamType, value: &Value) -> Result<Vec<u8>> {
    match param_type {
        ParamType::Uint(bits) => encode_uint(param_type, *bits, value),
        ParamType::Address => encode_uint(param_type, ADDRESS_BITS, value),
        ParamType::Bool => match value {
            Value::Bool(flag) => encode_uint(param_type, 8, &Value::Int(U256::from(u8::from(*flag)))),
            other => Err(invalid(param_type, other)),
        },
        ParamType::String | ParamType::Bytes => match value {
            Value::Bytes(data) => Ok(encode_bytes(data)),
            other => Err(invalid(param_type, other)),
        },
        ParamType::Tuple(types) => match value {
            Value::Tuple(values) => encode_head_tail(types.iter(), types.len(), values),
            other => Err(invalid(param_type, other)),
        },
        ParamType::FixedArray(inner, len) => {
            let values = expect_seq(param_type, value)?;
            encode_fixed_array(inner, *len, values)
        }
        ParamType::Array(inner) => {
            let values = expect_seq(param_type, value)?;
            let mut out = Word::from_usize(values.len()).as_bytes().to_vec();
            out.extend(encode_fixed_array(inner, values.len(), values)?);
            Ok(out)
        }
        ParamType::FixedBytes(_) => Err(AbiError::UnsupportedType(param_type.to_string())),
    }
}

/// Left-padded word for an integer given as `Int` or big-endian `Bytes`
fn encode_uint(param_type: &ParamType, bits: usize, value: &Value) -> Result<Vec<u8>> {
    if bits == 0 || bits % 8 != 0 || bits > 256 {
        return Err(AbiError::UnsupportedType(param_type.to_string()));
    }

    let minimal = match value {
        Value::Int(n) => encode_unsigned(n),
        Value::Bytes(raw) => strip_leading_zeros(raw).to_vec(),
        other => return Err(invalid(param_type, other)),
    };
    check_width(&minimal, bits)?;

    Ok(left_pad(&minimal, bits / 8))
}

/// Length word followed by right-padded content
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = Word::from_usize(data.len()).as_bytes().to_vec();
    out.extend(right_pad(data));
    out
}

fn encode_fixed_array(inner: &ParamType, len: usize, values: &[Value]) -> Result<Vec<u8>> {
    encode_head_tail(std::iter::repeat(inner).take(len), len, values)
}

/// Head/tail layout shared by tuples and arrays.
///
/// A dynamic element's head slot holds the byte length of its own encoding,
/// not an offset into the tail.
fn encode_head_tail<'t, I>(types: I, arity: usize, values: &[Value]) -> Result<Vec<u8>>
where
    I: Iterator<Item = &'t ParamType>,
{
    let mut cursor = ValueCursor::new(values, arity)?;
    let mut head = Vec::new();
    let mut tail = Vec::new();

    for param_type in types {
        let encoded = encode_type(param_type, cursor.next_value()?)?;
        if param_type.is_dynamic() {
            head.extend_from_slice(Word::from_usize(encoded.len()).as_bytes());
            tail.extend(encoded);
        } else {
            head.extend(encoded);
        }
    }

    head.extend(tail);
    Ok(head)
}

fn expect_seq<'v>(param_type: &ParamType, value: &'v Value) -> Result<&'v [Value]> {
    match value {
        Value::Seq(values) => Ok(values),
        other => Err(invalid(param_type, other)),
    }
}

fn invalid(param_type: &ParamType, value: &Value) -> AbiError {
    AbiError::InvalidValue {
        expected: param_type.to_string(),
        got: value.kind(),
    }
}
