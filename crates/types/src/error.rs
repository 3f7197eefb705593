use thiserror::Error;

/// Errors that can occur when building a [`StructType`](crate::StructType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructError {
    /// Two elements share the same name.
    #[error("duplicate struct element name `{name}`")]
    DuplicateName { name: String },
}
