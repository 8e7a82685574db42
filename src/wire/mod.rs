//! Wire tree and the traits that move models across it.
//!
//! Every model is routed through [`WireTree`], a JSON value that keeps
//! object keys in insertion order. Raw bytes enter through [`parse`] and
//! leave through [`render`]; models never touch bytes directly.
//!
//! - [`ToWire`] - emit the fields that have been set
//! - [`FromWire`] - build or overlay a model from a tree, tolerating
//!   unknown keys, missing keys and explicit `null`s
//! - [`WireOperation`] - fixed service/operation names a request routes by

pub mod enums;

use crate::error::ModelError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Generic hierarchical value shared by every model.
pub type WireTree = Value;

/// Parses raw bytes into a wire tree.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the bytes are not valid JSON.
pub fn parse(bytes: &[u8]) -> Result<WireTree, ModelError> {
    serde_json::from_slice(bytes).map_err(ModelError::Parse)
}

/// Renders a wire tree as text, either pretty-printed or on one line.
pub fn render(tree: &WireTree, pretty: bool) -> Result<String, ModelError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };

    rendered.map_err(ModelError::Render)
}

/// Names a request is routed by. Both values are fixed by the service contract.
pub trait WireOperation {
    const SERVICE: &'static str;
    const OPERATION: &'static str;

    fn service_name(&self) -> &'static str {
        Self::SERVICE
    }

    fn operation_name(&self) -> &'static str {
        Self::OPERATION
    }
}

/// Serialization side of a model.
///
/// Implementors skip unset fields at the serde level, so the produced tree
/// contains exactly the keys the caller has set.
pub trait ToWire: Serialize {
    fn to_wire(&self) -> Result<WireTree, ModelError> {
        serde_json::to_value(self).map_err(ModelError::Render)
    }

    /// Renders the payload a transport would send. An empty model yields `{}`.
    fn serialize_payload(&self) -> Result<String, ModelError> {
        let tree = self.to_wire()?;
        render(&tree, false)
    }
}

/// Deserialization side of a model.
pub trait FromWire: Serialize + DeserializeOwned + Default {
    /// Model name used in error reports.
    const SHAPE: &'static str;

    fn from_wire(tree: &WireTree) -> Result<Self, ModelError> {
        let mut model = Self::default();
        model.assign(tree)?;
        Ok(model)
    }

    /// Overlays the keys present in `tree` onto this model.
    ///
    /// Recognized keys overwrite their field; absent or `null` keys keep the
    /// current value; unrecognized keys are ignored. A tree that is not an
    /// object carries no keys and leaves the model untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Shape`] when a recognized key holds a value of
    /// the wrong type and the field does not fall back to its default.
    fn assign(&mut self, tree: &WireTree) -> Result<&mut Self, ModelError> {
        let Some(incoming) = tree.as_object() else {
            tracing::debug!(
                shape = Self::SHAPE,
                kind = kind_of(tree),
                "Ignoring non-object wire tree"
            );
            return Ok(self);
        };

        let mut fields = match serde_json::to_value(&*self).map_err(ModelError::Render)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        for (key, value) in incoming {
            if value.is_null() {
                continue;
            }
            let mut value = value.clone();
            strip_nulls(&mut value);
            fields.insert(key.clone(), value);
        }

        *self = serde_json::from_value(Value::Object(fields))
            .map_err(|source| ModelError::shape(Self::SHAPE, source))?;

        Ok(self)
    }
}

/// Removes `null` members from every object nested in `value`.
///
/// Array elements are kept in place so positions stay meaningful; list
/// fields of model type read a `null` element as a default model.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            fields.retain(|_, v| !v.is_null());
            fields.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
