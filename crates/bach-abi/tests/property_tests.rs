//! Property tests for the encoder

use bach_abi::{
    encode, encode_type, AbiError, CallDescriptor, Encoder, ParamType, Value, U256,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// A scalar type paired with a value that fits it
fn scalar_pair() -> impl Strategy<Value = (ParamType, Value)> {
    prop_oneof![
        (1usize..=32)
            .prop_flat_map(|width| (Just(width), vec(any::<u8>(), 0..=width)))
            .prop_map(|(width, raw)| (ParamType::Uint(width * 8), Value::Bytes(raw))),
        any::<u64>().prop_map(|n| (ParamType::Uint(64), Value::Int(U256::from(n)))),
        any::<[u8; 20]>().prop_map(|raw| (ParamType::Address, Value::Bytes(raw.to_vec()))),
        any::<bool>().prop_map(|flag| (ParamType::Bool, Value::Bool(flag))),
        vec(any::<u8>(), 0..100).prop_map(|raw| (ParamType::Bytes, Value::Bytes(raw))),
        ".{0,70}".prop_map(|s: String| (ParamType::String, Value::string(s))),
    ]
}

/// Any encodable type paired with a matching value
fn type_value_pair() -> impl Strategy<Value = (ParamType, Value)> {
    scalar_pair().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(|pairs| {
                let (types, values): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
                (ParamType::Tuple(types), Value::Tuple(values))
            }),
            (inner.clone(), 1..4usize).prop_map(|((ty, value), len)| {
                (ParamType::FixedArray(Box::new(ty), len), Value::Seq(vec![value; len]))
            }),
            (inner, 0..4usize).prop_map(|((ty, value), len)| {
                (ParamType::Array(Box::new(ty)), Value::Seq(vec![value; len]))
            }),
        ]
    })
}

/// Minimal big-endian bytes one byte wider than `uint(width * 8)` allows
fn oversized_uint() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (1usize..32).prop_flat_map(|width| {
        (Just(width), 1u8..=255, vec(any::<u8>(), width)).prop_map(|(width, first, rest)| {
            let mut raw = vec![first];
            raw.extend(rest);
            (width, raw)
        })
    })
}

/// Encoded size of a static type, independent of its value
fn static_size(ty: &ParamType) -> usize {
    match ty {
        ParamType::Tuple(types) => types.iter().map(static_size).sum(),
        ParamType::FixedArray(inner, len) => static_size(inner) * len,
        _ => 32,
    }
}

proptest! {
    #[test]
    fn encoding_is_word_aligned((ty, value) in type_value_pair()) {
        let encoded = encode_type(&ty, &value).unwrap();
        prop_assert_eq!(encoded.len() % 32, 0);
    }

    #[test]
    fn static_types_encode_to_fixed_size((ty, value) in type_value_pair()) {
        prop_assume!(ty.is_static());
        let encoded = encode_type(&ty, &value).unwrap();
        prop_assert_eq!(encoded.len(), static_size(&ty));
    }

    #[test]
    fn call_data_is_selector_plus_words((ty, value) in type_value_pair()) {
        let call = CallDescriptor::function("f", vec![ty]);
        let encoded = encode(&[value], &call).unwrap();
        prop_assert!(encoded.len() >= 4);
        prop_assert_eq!((encoded.len() - 4) % 32, 0);
    }

    #[test]
    fn overflow_never_truncates((width, raw) in oversized_uint()) {
        let ty = ParamType::Uint(width * 8);
        let err = encode_type(&ty, &Value::Bytes(raw.clone())).unwrap_err();
        prop_assert!(matches!(err, AbiError::Overflow { .. }), "expected Overflow, got {:?}", err);

        let as_int = Value::Int(U256::from_big_endian(&raw));
        let err = encode_type(&ty, &as_int).unwrap_err();
        prop_assert!(matches!(err, AbiError::Overflow { .. }), "expected Overflow, got {:?}", err);
    }

    #[test]
    fn arity_mismatch_fails_before_output(types in 0usize..6, values in 0usize..6) {
        prop_assume!(types != values);
        let call = CallDescriptor::function("f", vec![ParamType::Bool; types]);
        let err = encode(&vec![Value::Bool(true); values], &call).unwrap_err();
        prop_assert!(
            matches!(err, AbiError::ArityMismatch { expected, got } if expected == types && got == values),
            "expected ArityMismatch({}, {}), got {:?}",
            types,
            values,
            err
        );
    }

    #[test]
    fn selector_is_deterministic(name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
        let call = CallDescriptor::function(name, vec![ParamType::Uint(32), ParamType::Bool]);
        let encoder = Encoder::new();
        let first = encoder.selector(&call).unwrap();
        prop_assert_eq!(first.len(), 4);
        prop_assert_eq!(first, encoder.selector(&call).unwrap());
    }
}

#[test]
fn differing_types_change_selector() {
    let encoder = Encoder::new();
    let a = encoder
        .selector(&CallDescriptor::function("baz", vec![ParamType::Uint(32), ParamType::Bool]))
        .unwrap();
    let b = encoder
        .selector(&CallDescriptor::function("baz", vec![ParamType::Uint(64), ParamType::Bool]))
        .unwrap();
    assert_ne!(a, b);
}
