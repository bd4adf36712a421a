//! Render error types.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering an element.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid value for {element}: expected {expected}, got {actual}")]
    InvalidValue {
        element: String,
        expected: String,
        actual: String,
    },

    #[error("Value of {element} has no byte form: {actual}")]
    NotBytes { element: String, actual: String },

    #[error("No mutation at index {index} of {element}")]
    MissingMutation { element: String, index: usize },
}

impl RenderError {
    pub fn invalid_value(
        element: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn not_bytes(element: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::NotBytes {
            element: element.into(),
            actual: actual.into(),
        }
    }

    /// The mutant index points past the descriptors the element yields.
    pub fn missing_mutation(element: impl Into<String>, index: usize) -> Self {
        Self::MissingMutation {
            element: element.into(),
            index,
        }
    }

    /// Qualified name of the element that failed to render.
    pub fn element(&self) -> &str {
        match self {
            Self::InvalidValue { element, .. }
            | Self::NotBytes { element, .. }
            | Self::MissingMutation { element, .. } => element,
        }
    }
}
