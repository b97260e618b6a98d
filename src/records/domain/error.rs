//! Error types for record domain validation.

use thiserror::Error;

/// Errors returned while constructing record domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDomainError {
    /// The record has no `DeveloperName` field.
    #[error("record is missing the DeveloperName field")]
    MissingDeveloperName,

    /// The `DeveloperName` field is present but is not a string.
    #[error("DeveloperName must be a string value")]
    NonTextDeveloperName,

    /// The developer name is empty.
    #[error("developer name must not be empty")]
    EmptyDeveloperName,

    /// The object API name is empty after trimming.
    #[error("object API name must not be empty")]
    EmptyObjectApiName,

    /// The qualified identifier is empty after trimming.
    #[error("qualified identifier must not be empty")]
    EmptyQualifiedName,
}
