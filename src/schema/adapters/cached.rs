//! Per-object-type describe cache.

use crate::records::domain::{ObjectApiName, Record};
use crate::schema::{
    domain::ObjectDescribe,
    ports::{SchemaProvider, SchemaProviderResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Schema provider decorator that caches describe responses per object type.
///
/// Only successful describes are cached. Object type resolution is passed
/// through uncached because it depends on the sample record.
#[derive(Debug, Clone)]
pub struct CachedSchemaProvider<P>
where
    P: SchemaProvider,
{
    inner: Arc<P>,
    describes: Arc<RwLock<HashMap<ObjectApiName, ObjectDescribe>>>,
}

impl<P> CachedSchemaProvider<P>
where
    P: SchemaProvider,
{
    /// Wraps a schema provider.
    #[must_use]
    pub fn new(inner: Arc<P>) -> Self {
        Self {
            inner,
            describes: Arc::default(),
        }
    }

    /// Drops every cached describe response.
    pub fn invalidate(&self) {
        self.describes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, object: &ObjectApiName) -> Option<ObjectDescribe> {
        self.describes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(object)
            .cloned()
    }
}

#[async_trait]
impl<P> SchemaProvider for CachedSchemaProvider<P>
where
    P: SchemaProvider,
{
    async fn resolve_object_type(&self, sample: &Record) -> SchemaProviderResult<ObjectApiName> {
        self.inner.resolve_object_type(sample).await
    }

    async fn describe_object(
        &self,
        object: &ObjectApiName,
    ) -> SchemaProviderResult<ObjectDescribe> {
        if let Some(describe) = self.cached(object) {
            debug!(object = %object, "describe served from cache");
            return Ok(describe);
        }
        let describe = self.inner.describe_object(object).await?;
        self.describes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(object.clone(), describe.clone());
        Ok(describe)
    }
}
