//! Reference-counted stylesheet activation.
//!
//! Several table sessions on one page may each need the same global
//! stylesheet. The registry installs it once and keeps a body class set for
//! as long as at least one lease is alive:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The registry in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
