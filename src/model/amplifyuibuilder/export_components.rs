//! Models for the `ExportComponents` operation.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use super::component::Component;
use super::SERVICE_NAME;
use crate::wire::{FromWire, ToWire, WireOperation};

/// Request to export every component of an Amplify app environment.
///
/// Both fields are optional at this layer; the service rejects a request
/// that omits them.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportComponentsRequest {
    app_id: Option<String>,
    environment_name: Option<String>,
}

impl ExportComponentsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unique ID of the Amplify app to export components to.
    pub fn app_id(&self) -> &str {
        self.app_id.as_deref().unwrap_or_default()
    }

    pub fn app_id_has_been_set(&self) -> bool {
        self.app_id.is_some()
    }

    pub fn set_app_id(&mut self, value: impl Into<String>) {
        self.app_id = Some(value.into());
    }

    pub fn with_app_id(mut self, value: impl Into<String>) -> Self {
        self.set_app_id(value);
        self
    }

    /// The name of the backend environment that is a part of the Amplify app.
    pub fn environment_name(&self) -> &str {
        self.environment_name.as_deref().unwrap_or_default()
    }

    pub fn environment_name_has_been_set(&self) -> bool {
        self.environment_name.is_some()
    }

    pub fn set_environment_name(&mut self, value: impl Into<String>) {
        self.environment_name = Some(value.into());
    }

    pub fn with_environment_name(mut self, value: impl Into<String>) -> Self {
        self.set_environment_name(value);
        self
    }
}

impl WireOperation for ExportComponentsRequest {
    const SERVICE: &'static str = SERVICE_NAME;
    const OPERATION: &'static str = "ExportComponents";
}

impl ToWire for ExportComponentsRequest {}

impl FromWire for ExportComponentsRequest {
    const SHAPE: &'static str = "ExportComponentsRequest";
}

/// Result of `ExportComponents`: the exported components.
///
/// A list element that is `null` or not an object reads as a default
/// [`Component`]; the other elements keep their position and values.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExportComponentsResult {
    #[serde_as(as = "DefaultOnError<Vec<DefaultOnError>>")]
    entities: Vec<Component>,
}

impl ExportComponentsResult {
    /// The components exported from the app environment, in service order.
    pub fn entities(&self) -> &[Component] {
        &self.entities
    }
}

impl ToWire for ExportComponentsResult {}

impl FromWire for ExportComponentsResult {
    const SHAPE: &'static str = "ExportComponentsResult";
}
