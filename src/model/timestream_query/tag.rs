//! Key/value tag attached to Timestream resources.

use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, ToWire};

/// A key/value label used to organize and filter scheduled queries.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    key: Option<String>,
    value: Option<String>,
}

impl Tag {
    /// Builds a tag with both fields set.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }

    /// The tag key, e.g. `env`.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn key_has_been_set(&self) -> bool {
        self.key.is_some()
    }

    pub fn set_key(&mut self, value: impl Into<String>) {
        self.key = Some(value.into());
    }

    pub fn with_key(mut self, value: impl Into<String>) -> Self {
        self.set_key(value);
        self
    }

    /// The value paired with the key. May be empty.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn value_has_been_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }
}

impl ToWire for Tag {}

impl FromWire for Tag {
    const SHAPE: &'static str = "Tag";
}
