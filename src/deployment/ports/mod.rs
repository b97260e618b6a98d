//! Port contracts for deployment and deletion.
//!
//! Ports define infrastructure-agnostic interfaces used by deployment
//! services.

pub mod gateway;
pub mod timer;

pub use gateway::{MetadataGateway, MetadataGatewayError, MetadataGatewayResult};
pub use timer::PollTimer;
