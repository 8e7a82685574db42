//! Component entity returned by Amplify UI Builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use std::collections::BTreeMap;

use crate::wire::{FromWire, ToWire};

/// A UI component stored in an Amplify app environment.
///
/// Read-only: every field is filled from the service response. Missing
/// keys, and values of the wrong type, leave the field at its default
/// without disturbing the other fields.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Component {
    #[serde_as(as = "DefaultOnError")]
    id: String,
    #[serde_as(as = "DefaultOnError")]
    app_id: String,
    #[serde_as(as = "DefaultOnError")]
    environment_name: String,
    #[serde_as(as = "DefaultOnError")]
    source_id: String,
    #[serde_as(as = "DefaultOnError")]
    name: String,
    #[serde_as(as = "DefaultOnError")]
    component_type: String,
    #[serde_as(as = "DefaultOnError")]
    schema_version: String,
    #[serde_as(as = "DefaultOnError")]
    created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError")]
    modified_at: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError<BTreeMap<_, DefaultOnError>>")]
    tags: BTreeMap<String, String>,
}

impl Component {
    /// The unique ID of the component.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The unique ID of the Amplify app the component belongs to.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The backend environment of the Amplify app that holds the component.
    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    /// The ID of the component in its original source system, such as Figma.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// The display name of the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type of the component, such as a primitive form or a custom
    /// component.
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Version of the component schema.
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// When the component was created, if the response carried a valid timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// When the component was last modified, if the response carried a valid timestamp.
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Tags attached to the component. Entries with a non-string value read as `""`.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }
}

impl ToWire for Component {}

impl FromWire for Component {
    const SHAPE: &'static str = "Component";
}
