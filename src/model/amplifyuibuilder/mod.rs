//! Amplify UI Builder models.

pub mod component;
pub mod export_components;

pub use component::Component;
pub use export_components::{ExportComponentsRequest, ExportComponentsResult};

/// Service namespace used to route Amplify UI Builder operations.
pub const SERVICE_NAME: &str = "AmplifyUIBuilder";
