//! Error types for schema construction

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building or loading a schema.
///
/// Editing itself never fails; only schema construction does.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Two descriptors in one schema share a name
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// A descriptor was given an empty name
    #[error("field at position {position} has an empty name")]
    EmptyFieldName { position: usize },

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
