//! # svc-models
//!
//! Typed request and result models for cloud service APIs, with
//! presence-aware JSON serialization.
//!
//! ## Architecture
//!
//! - **Wire Layer** ([`wire`]) - The shared JSON tree, byte boundary, and
//!   the [`ToWire`](wire::ToWire) / [`FromWire`](wire::FromWire) traits
//! - **Models** ([`model`]) - One module per service: requests, results,
//!   nested settings and enums
//! - **Catalog** ([`catalog`]) - Routes operation names to their models
//!
//! ## Conventions
//!
//! - A request field that was never set is omitted from the payload,
//!   even if its default would be a valid value
//! - Parsing is tolerant: unknown keys are ignored, missing or `null` keys
//!   leave the field at its default, unknown enum strings become `Unknown`
//! - Nothing here performs I/O; transport, signing and retries live
//!   elsewhere
//!
//! ## Quick Start
//!
//! ```rust
//! use svc_models::prelude::*;
//! use svc_models::model::amplifyuibuilder::ExportComponentsRequest;
//!
//! let request = ExportComponentsRequest::new().with_app_id("app-123");
//! assert_eq!(request.serialize_payload().unwrap(), r#"{"AppId":"app-123"}"#);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod wire;

pub use error::ModelError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::catalog::Operation;
    pub use crate::error::ModelError;
    pub use crate::wire::{FromWire, ToWire, WireOperation, WireTree};
}
