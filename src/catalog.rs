//! Operation catalog: routes an operation name to its request and result models.
//!
//! The catalog is the only place that knows which request type belongs to
//! which result type. Lookups accept either the bare operation name
//! (`CreateScheduledQuery`) or the service-qualified form
//! (`TimestreamQuery.CreateScheduledQuery`).

use crate::error::ModelError;
use crate::model::amplifyuibuilder::{ExportComponentsRequest, ExportComponentsResult};
use crate::model::timestream_query::{CreateScheduledQueryRequest, CreateScheduledQueryResult};
use crate::wire::{FromWire, ToWire, WireOperation, WireTree};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ExportComponents,
    CreateScheduledQuery,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::ExportComponents,
        Operation::CreateScheduledQuery,
    ];

    pub fn service_name(self) -> &'static str {
        match self {
            Operation::ExportComponents => ExportComponentsRequest::SERVICE,
            Operation::CreateScheduledQuery => CreateScheduledQueryRequest::SERVICE,
        }
    }

    pub fn operation_name(self) -> &'static str {
        match self {
            Operation::ExportComponents => ExportComponentsRequest::OPERATION,
            Operation::CreateScheduledQuery => CreateScheduledQueryRequest::OPERATION,
        }
    }

    /// `Service.Operation` form.
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.service_name(), self.operation_name())
    }

    /// Resolves an operation by bare or service-qualified name.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownOperation`] if nothing matches.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| match name.split_once('.') {
                Some((service, operation)) => {
                    service == op.service_name() && operation == op.operation_name()
                }
                None => name == op.operation_name(),
            })
            .ok_or_else(|| ModelError::UnknownOperation(name.to_string()))
    }

    /// Builds the typed request from `tree` and returns the payload it would
    /// send: only the keys the request recognizes and that carry a value.
    pub fn request_payload(self, tree: &WireTree) -> Result<WireTree, ModelError> {
        tracing::debug!(operation = self.operation_name(), "Building request payload");

        match self {
            Operation::ExportComponents => normalize::<ExportComponentsRequest>(tree),
            Operation::CreateScheduledQuery => normalize::<CreateScheduledQueryRequest>(tree),
        }
    }

    /// Builds the typed result from a response tree and renders it back,
    /// with every recognized field present at its value or default.
    pub fn result_view(self, tree: &WireTree) -> Result<WireTree, ModelError> {
        tracing::debug!(operation = self.operation_name(), "Parsing result");

        match self {
            Operation::ExportComponents => normalize::<ExportComponentsResult>(tree),
            Operation::CreateScheduledQuery => normalize::<CreateScheduledQueryResult>(tree),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service_name(), self.operation_name())
    }
}

impl FromStr for Operation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Passes `tree` through model `T` and back.
fn normalize<T: FromWire + ToWire>(tree: &WireTree) -> Result<WireTree, ModelError> {
    let model = T::from_wire(tree)?;
    let normalized = model.to_wire()?;

    tracing::trace!(shape = T::SHAPE, "Normalized wire tree");

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_name_bare_and_qualified() {
        assert_eq!(
            Operation::from_name("ExportComponents").unwrap(),
            Operation::ExportComponents
        );
        assert_eq!(
            Operation::from_name("TimestreamQuery.CreateScheduledQuery").unwrap(),
            Operation::CreateScheduledQuery
        );
    }

    #[test]
    fn test_from_name_rejects_wrong_service() {
        assert!(Operation::from_name("AmplifyUIBuilder.CreateScheduledQuery").is_err());
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        let err = Operation::from_name("exportcomponents").unwrap_err();
        assert!(matches!(err, ModelError::UnknownOperation(name) if name == "exportcomponents"));
    }

    #[test]
    fn test_display_is_qualified() {
        assert_eq!(
            Operation::ExportComponents.to_string(),
            "AmplifyUIBuilder.ExportComponents"
        );
        assert_eq!(
            Operation::CreateScheduledQuery.qualified_name(),
            "TimestreamQuery.CreateScheduledQuery"
        );
    }

    #[test]
    fn test_every_operation_resolves_by_its_own_names() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.operation_name()).unwrap(), *op);
            assert_eq!(op.qualified_name().parse::<Operation>().unwrap(), *op);
        }
    }

    #[test]
    fn test_request_payload_drops_unknown_and_null_keys() {
        let payload = Operation::ExportComponents
            .request_payload(&json!({
                "AppId": "app-123",
                "EnvironmentName": null,
                "Verbose": true
            }))
            .unwrap();

        assert_eq!(payload, json!({"AppId": "app-123"}));
    }

    #[test]
    fn test_result_view_fills_defaults() {
        let view = Operation::CreateScheduledQuery
            .result_view(&json!({"RequestId": "r-1"}))
            .unwrap();

        assert_eq!(view, json!({"Arn": ""}));
    }
}
