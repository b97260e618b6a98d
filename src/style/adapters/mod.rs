//! Adapter implementations for page styling.

pub mod memory;

pub use memory::RecordingStyleHost;
