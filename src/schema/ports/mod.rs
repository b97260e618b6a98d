//! Port contracts for schema lookup.

pub mod provider;

pub use provider::{SchemaProvider, SchemaProviderError, SchemaProviderResult};
