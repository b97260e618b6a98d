//! Table widget events consumed as plain data.

use crate::records::domain::Record;
use serde::{Deserialize, Serialize};

/// Row action chosen from a row's action menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowActionEvent {
    /// Name of the chosen action.
    pub action_name: String,
    /// Row the action was chosen on.
    pub row: Record,
}

impl RowActionEvent {
    /// Creates a row action event.
    #[must_use]
    pub fn new(action_name: impl Into<String>, row: Record) -> Self {
        Self {
            action_name: action_name.into(),
            row,
        }
    }
}
