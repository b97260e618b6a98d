//! Table session services.

mod deletion;
mod notices;
mod table;

pub use deletion::{DeleteCoordinator, DeleteError, DeleteOutcome};
pub use table::{ConnectOutcome, MetadataTable, SaveOutcome, TableCollaborators, TableError};
