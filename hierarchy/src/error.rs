//! Definition error types.

use thiserror::Error;

/// Result type for hierarchy assembly.
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Errors that reject a protocol definition before fuzzing starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Element with empty name under {context}")]
    EmptyName { context: String },

    #[error("Duplicate qualified name: {0}")]
    DuplicateQualifiedName(String),

    #[error("Mutation count mismatch for {element}: declared {declared}, yielded {yielded}")]
    MutationCountMismatch {
        element: String,
        declared: usize,
        yielded: usize,
    },

    #[error("Mutation addresses unknown element: {0}")]
    UnknownTarget(String),
}

impl DefinitionError {
    pub fn empty_name(context: impl Into<String>) -> Self {
        Self::EmptyName {
            context: context.into(),
        }
    }

    pub fn duplicate_qualified_name(name: impl Into<String>) -> Self {
        Self::DuplicateQualifiedName(name.into())
    }

    pub fn mutation_count_mismatch(
        element: impl Into<String>,
        declared: usize,
        yielded: usize,
    ) -> Self {
        Self::MutationCountMismatch {
            element: element.into(),
            declared,
            yielded,
        }
    }

    pub fn unknown_target(name: impl Into<String>) -> Self {
        Self::UnknownTarget(name.into())
    }
}
