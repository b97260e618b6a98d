//! Step definitions for table save and delete scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
