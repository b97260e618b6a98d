//! Unsaved inline edits.

use super::{DEVELOPER_NAME_FIELD, FieldMap, FieldValue};
use serde::{Deserialize, Serialize};

/// Partial record holding unsaved table-row edits.
///
/// Drafts are keyed by `DeveloperName`. A draft without that key cannot be
/// matched to a record and is ignored during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftEdit {
    fields: FieldMap,
}

impl DraftEdit {
    /// Creates a draft for the record with the given developer name.
    #[must_use]
    pub fn for_record(developer_name: impl Into<String>) -> Self {
        Self::default().with_field(DEVELOPER_NAME_FIELD, developer_name.into())
    }

    /// Creates a draft from a raw field map.
    #[must_use]
    pub const fn from_fields(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Sets an edited field value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the matching key, when present and non-empty.
    #[must_use]
    pub fn developer_name(&self) -> Option<&str> {
        self.fields
            .get(DEVELOPER_NAME_FIELD)
            .and_then(FieldValue::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Returns the edited fields.
    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }
}
