//! cmdt_table: custom metadata table engine.
//!
//! This crate backs a generic table over custom metadata records. Operators
//! view, inline-edit and delete records; edits are reconciled against the
//! loaded baseline, deployed asynchronously and tracked until the deployment
//! job resolves.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, tokio, tracing)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`records`]: Records, draft edits and reconciliation
//! - [`schema`]: Object describe lookup and column building
//! - [`deployment`]: Deploy submission and status polling
//! - [`notification`]: User-facing notifications
//! - [`table`]: The table session tying the contexts together
//! - [`style`]: Reference-counted stylesheet activation
//! - [`error`]: Normalized collaborator failures

pub mod deployment;
pub mod error;
pub mod notification;
pub mod records;
pub mod schema;
pub mod style;
pub mod table;
