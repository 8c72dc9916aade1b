//! Call descriptors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ParamType;

/// Function name (optional) plus the positional argument types of one call.
///
/// Without a name no selector is emitted and only the arguments are encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallDescriptor {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    types: Vec<ParamType>,
}

impl CallDescriptor {
    /// Describe a named function call
    pub fn function(name: impl Into<String>, types: Vec<ParamType>) -> Self {
        Self {
            name: Some(name.into()),
            types,
        }
    }

    /// Describe a bare argument list (no selector)
    pub fn arguments(types: Vec<ParamType>) -> Self {
        Self { name: None, types }
    }

    /// Function name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Positional argument types
    pub fn types(&self) -> &[ParamType] {
        &self.types
    }

    /// Canonical signature, e.g. `baz(uint32,bool)`
    pub fn signature(&self) -> Option<String> {
        self.name().map(|name| signature(name, &self.types))
    }

    /// Same argument types without the function name
    pub fn without_name(&self) -> Self {
        Self::arguments(self.types.clone())
    }
}

/// Render `name(type1,type2,...)` from canonical type forms
pub fn signature(name: &str, types: &[ParamType]) -> String {
    let params: Vec<String> = types.iter().map(ParamType::signature).collect();
    format!("{}({})", name, params.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature() {
        let call = CallDescriptor::function("baz", vec![ParamType::Uint(32), ParamType::Bool]);
        assert_eq!(call.signature().as_deref(), Some("baz(uint32,bool)"));
        assert_eq!(call.name(), Some("baz"));
        assert_eq!(call.types().len(), 2);
    }

    #[test]
    fn test_signature_nested() {
        let types = vec![
            ParamType::Tuple(vec![ParamType::Uint(32), ParamType::Bool]),
            ParamType::FixedArray(Box::new(ParamType::Uint(32)), 2),
            ParamType::Array(Box::new(ParamType::String)),
        ];
        assert_eq!(signature("f", &types), "f((uint32,bool),uint32[2],string[])");
        assert_eq!(signature("g", &[]), "g()");
    }

    #[test]
    fn test_arguments_have_no_signature() {
        let call = CallDescriptor::arguments(vec![ParamType::Bool]);
        assert_eq!(call.name(), None);
        assert_eq!(call.signature(), None);

        let named = CallDescriptor::function("f", vec![ParamType::Bool]);
        assert_eq!(named.without_name(), call);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_call_descriptor_json() {
        let call: CallDescriptor =
            serde_json::from_str(r#"{"name": "baz", "types": [{"uint": 32}, "bool"]}"#).unwrap();
        assert_eq!(call.signature().as_deref(), Some("baz(uint32,bool)"));

        let bare: CallDescriptor = serde_json::from_str(r#"{"types": ["string"]}"#).unwrap();
        assert_eq!(bare.name(), None);
    }
}
