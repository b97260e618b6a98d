//! Object schema lookup and table column building.
//!
//! The schema context reads field descriptors from an external schema
//! provider and turns a host-configured display list into ordered column
//! specifications for the table widget. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Column building in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
