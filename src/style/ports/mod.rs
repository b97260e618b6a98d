//! Port contracts for page styling.

pub mod host;

pub use host::StyleHost;
