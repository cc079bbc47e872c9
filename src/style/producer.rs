//! Conversion of raw style function output into [`StyleUnit`]s.
//!
//! Style functions that are not written against the builder API hand back a
//! JSON-like map instead. The contract is simple: the return value must be an
//! object whose values are strings, numbers or arrays of those. Keys starting
//! with `:` hold an object of declarations for that pseudo class.
//!
//! ```rust
//! use herb::StyleUnit;
//! use serde_json::json;
//!
//! let unit = StyleUnit::from_producer(
//!     "button",
//!     "app.ui",
//!     &json!({ "color": "red", "margin": [0, "auto"], ":hover": { "color": "blue" } }),
//! )
//! .unwrap();
//!
//! assert_eq!(unit.style["margin"].to_css(), "0 auto");
//! assert_eq!(unit.pseudo["hover"]["color"].to_css(), "blue");
//! ```

use serde_json::Value as Json;

use super::unit::{Declarations, StyleUnit};
use super::value::Value;
use crate::error::HerbError;

impl StyleUnit {
    /// Converts the output of the style function `namespace/function`.
    ///
    /// # Errors
    ///
    /// Returns [`HerbError::ProducerContractViolation`] when the output is not
    /// an object, or when a value cannot be expressed as CSS. The error
    /// carries the offending value.
    pub fn from_producer(function: &str, namespace: &str, output: &Json) -> Result<Self, HerbError> {
        let violation = |value: &Json| HerbError::ProducerContractViolation {
            function: function.to_string(),
            namespace: namespace.to_string(),
            value: value.to_string(),
        };

        let map = output.as_object().ok_or_else(|| violation(output))?;
        let mut unit = StyleUnit::new();

        for (key, value) in map {
            if let Some(pseudo) = key.strip_prefix(':') {
                let nested = value.as_object().ok_or_else(|| violation(value))?;
                let mut declarations = Declarations::new();
                for (property, value) in nested {
                    let converted = convert(value).ok_or_else(|| violation(value))?;
                    declarations.insert(property.clone(), converted);
                }
                unit.pseudo.insert(pseudo.to_string(), declarations);
            } else {
                let converted = convert(value).ok_or_else(|| violation(value))?;
                unit.style.insert(key.clone(), converted);
            }
        }

        Ok(unit)
    }
}

fn convert(value: &Json) -> Option<Value> {
    match value {
        Json::String(s) => Some(Value::Keyword(s.clone())),
        Json::Number(n) => n.as_f64().map(Value::Number),
        Json::Array(items) => items
            .iter()
            .map(convert)
            .collect::<Option<Vec<_>>>()
            .map(Value::List),
        Json::Null | Json::Bool(_) | Json::Object(_) => None,
    }
}
