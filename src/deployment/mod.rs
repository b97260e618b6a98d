//! Asynchronous deployment of record edits and deployment-job tracking.
//!
//! Changed records are submitted to a deploy collaborator, which may hand
//! back a job identifier. Jobs with an identifier are polled at a fixed
//! interval until they reach a resolved status; jobs without one are treated
//! as already complete. The same collaborator also accepts batched deletes.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Submission and polling in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
