//! In-memory schema provider for tests and local hosts.

use crate::error::CollaboratorError;
use crate::records::domain::{ObjectApiName, Record};
use crate::schema::{
    domain::ObjectDescribe,
    ports::{SchemaProvider, SchemaProviderError, SchemaProviderResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory schema provider.
///
/// Object types are resolved from a per-record mapping first and then from
/// an optional default type. Describe calls are counted so callers can
/// observe caching behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaProvider {
    state: Arc<RwLock<InMemorySchemaState>>,
}

#[derive(Debug, Default)]
struct InMemorySchemaState {
    describes: HashMap<ObjectApiName, ObjectDescribe>,
    record_types: HashMap<String, ObjectApiName>,
    default_type: Option<ObjectApiName>,
    failure: Option<CollaboratorError>,
    describe_calls: usize,
    resolve_calls: usize,
}

fn lock_error(err: impl ToString) -> SchemaProviderError {
    SchemaProviderError::Collaborator(CollaboratorError::opaque(std::io::Error::other(
        err.to_string(),
    )))
}

impl InMemorySchemaProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the describe response for an object type.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn register_object(
        &self,
        object: ObjectApiName,
        describe: ObjectDescribe,
    ) -> SchemaProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.describes.insert(object, describe);
        Ok(())
    }

    /// Maps a developer name to an object type for resolution.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn register_record_type(
        &self,
        developer_name: impl Into<String>,
        object: ObjectApiName,
    ) -> SchemaProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.record_types.insert(developer_name.into(), object);
        Ok(())
    }

    /// Sets the object type reported for records without a mapping.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn set_default_type(&self, object: ObjectApiName) -> SchemaProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.default_type = Some(object);
        Ok(())
    }

    /// Makes every subsequent call fail with the given error.
    ///
    /// Passing `None` restores normal behaviour.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn set_failure(&self, failure: Option<CollaboratorError>) -> SchemaProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = failure;
        Ok(())
    }

    /// Returns how many describe calls reached this provider.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn describe_calls(&self) -> SchemaProviderResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.describe_calls)
    }

    /// Returns how many resolve calls reached this provider.
    ///
    /// # Errors
    ///
    /// Returns collaborator errors when lock acquisition fails.
    pub fn resolve_calls(&self) -> SchemaProviderResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.resolve_calls)
    }
}

#[async_trait]
impl SchemaProvider for InMemorySchemaProvider {
    async fn resolve_object_type(&self, sample: &Record) -> SchemaProviderResult<ObjectApiName> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.resolve_calls += 1;
        if let Some(failure) = &state.failure {
            return Err(failure.clone().into());
        }
        state
            .record_types
            .get(sample.developer_name().as_str())
            .or(state.default_type.as_ref())
            .cloned()
            .ok_or_else(|| SchemaProviderError::Unresolvable(sample.developer_name().clone()))
    }

    async fn describe_object(
        &self,
        object: &ObjectApiName,
    ) -> SchemaProviderResult<ObjectDescribe> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.describe_calls += 1;
        if let Some(failure) = &state.failure {
            return Err(failure.clone().into());
        }
        state
            .describes
            .get(object)
            .cloned()
            .ok_or_else(|| SchemaProviderError::UnknownObject(object.clone()))
    }
}
