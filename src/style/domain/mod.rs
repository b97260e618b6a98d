//! Stylesheet domain types.

mod sheet;

pub use sheet::{MODAL_FOOTER_FIX_CLASS, StyleSheet};
