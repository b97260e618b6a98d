//! Domain model for a table session.

mod config;
mod events;
mod state;

pub use config::TableConfig;
pub use events::RowActionEvent;
pub use state::{SharedTableState, TableState};
