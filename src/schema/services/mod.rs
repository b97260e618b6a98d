//! Column building services.

mod columns;

pub use columns::{DELETE_ACTION, build_columns, parse_display_list};
