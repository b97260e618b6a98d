//! Adapter implementations for schema lookup.

pub mod cached;
pub mod memory;

pub use cached::CachedSchemaProvider;
pub use memory::InMemorySchemaProvider;
