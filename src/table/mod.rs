//! Custom metadata table session.
//!
//! Ties the other contexts together behind the operations a table host
//! drives: loading the schema, tracking selection and drafts, saving edits
//! through deploy-and-poll, and deleting rows. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;
