//! Adapter implementations for deployment ports.

pub mod memory;
pub mod timer;

pub use memory::ScriptedMetadataGateway;
pub use timer::{RecordingPollTimer, TokioPollTimer};
