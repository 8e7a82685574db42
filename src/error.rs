//! Error type shared by the wire boundary and the operation catalog.
//!
//! Models themselves never fail: an unset field is simply absent. Errors
//! only arise where raw bytes become a tree, where a tree value has the
//! wrong type for a field, or where an operation name cannot be routed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Input bytes are not a well-formed wire tree.
    #[error("Malformed wire payload: {0}")]
    Parse(#[source] serde_json::Error),

    /// A model or tree could not be rendered.
    #[error("Failed to render wire payload: {0}")]
    Render(#[source] serde_json::Error),

    /// A recognized key carries a value of the wrong type.
    #[error("Wire payload does not match `{shape}`: {source}")]
    Shape {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown operation `{0}`")]
    UnknownOperation(String),
}

impl ModelError {
    pub fn shape(shape: &'static str, source: serde_json::Error) -> Self {
        Self::Shape { shape, source }
    }

    /// Stable machine-readable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Parse(_) => "parse_error",
            ModelError::Render(_) => "render_error",
            ModelError::Shape { .. } => "shape_mismatch",
            ModelError::UnknownOperation(_) => "unknown_operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_names_the_model() {
        let source = serde_json::from_str::<String>("42").unwrap_err();
        let err = ModelError::shape("CreateScheduledQueryResult", source);

        assert_eq!(err.code(), "shape_mismatch");
        assert!(err.to_string().contains("CreateScheduledQueryResult"));
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = ModelError::UnknownOperation("DeleteEverything".to_string());

        assert_eq!(err.code(), "unknown_operation");
        assert_eq!(err.to_string(), "Unknown operation `DeleteEverything`");
    }
}
