//! Custom metadata records and draft reconciliation.
//!
//! Records are configuration-as-data rows keyed by an immutable
//! `DeveloperName`. Inline table edits arrive as partial draft records and are
//! reconciled against the baseline before anything is deployed:
//!
//! - Domain types in [`domain`]
//! - Reconciliation in [`services`]

pub mod domain;
pub mod services;
