//! Schema provider port for object type resolution and describe calls.

use crate::error::CollaboratorError;
use crate::records::domain::{DeveloperName, ObjectApiName, Record};
use crate::schema::domain::ObjectDescribe;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for schema provider operations.
pub type SchemaProviderResult<T> = Result<T, SchemaProviderError>;

/// Object schema lookup contract.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Resolves the object type of a sample record.
    ///
    /// Used only when the host does not supply an object type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaProviderError::Unresolvable`] when the record's type
    /// cannot be determined, or collaborator errors.
    async fn resolve_object_type(&self, sample: &Record) -> SchemaProviderResult<ObjectApiName>;

    /// Describes the fields of an object type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaProviderError::UnknownObject`] when the object type is
    /// not known, or collaborator errors.
    async fn describe_object(&self, object: &ObjectApiName)
    -> SchemaProviderResult<ObjectDescribe>;
}

/// Errors returned by schema provider implementations.
#[derive(Debug, Clone, Error)]
pub enum SchemaProviderError {
    /// The object type is not known to the provider.
    #[error("unknown object type: {0}")]
    UnknownObject(ObjectApiName),

    /// The object type of the sample record could not be determined.
    #[error("cannot resolve object type for record {0}")]
    Unresolvable(DeveloperName),

    /// The collaborator reported a failure.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
