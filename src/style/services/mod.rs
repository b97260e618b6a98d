//! Stylesheet lease management.

mod registry;

pub use registry::{StyleSheetLease, StyleSheetRegistry};
