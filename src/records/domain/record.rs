//! Record and field map types.

use super::{DeveloperName, DraftEdit, FieldValue, RecordDomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the identity field every record carries.
pub const DEVELOPER_NAME_FIELD: &str = "DeveloperName";

/// Field name to value mapping shared by records and drafts.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Custom metadata record.
///
/// A record always holds a non-empty string `DeveloperName`. The identity is
/// fixed at construction: field updates and draft merges never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldMap", into = "FieldMap")]
pub struct Record {
    developer_name: DeveloperName,
    fields: FieldMap,
}

impl Record {
    /// Creates a record holding only its identity field.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyDeveloperName`] when the name is
    /// empty.
    pub fn new(developer_name: impl Into<String>) -> Result<Self, RecordDomainError> {
        let name = DeveloperName::new(developer_name)?;
        let mut fields = FieldMap::new();
        fields.insert(
            DEVELOPER_NAME_FIELD.to_owned(),
            FieldValue::Text(name.as_str().to_owned()),
        );
        Ok(Self {
            developer_name: name,
            fields,
        })
    }

    /// Creates a record from a raw field map.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::MissingDeveloperName`] when the identity
    /// field is absent, [`RecordDomainError::NonTextDeveloperName`] when it is
    /// not a string, or [`RecordDomainError::EmptyDeveloperName`] when it is
    /// empty.
    pub fn from_fields(fields: FieldMap) -> Result<Self, RecordDomainError> {
        let name = match fields.get(DEVELOPER_NAME_FIELD) {
            None => return Err(RecordDomainError::MissingDeveloperName),
            Some(FieldValue::Text(text)) => DeveloperName::new(text.clone())?,
            Some(_) => return Err(RecordDomainError::NonTextDeveloperName),
        };
        Ok(Self {
            developer_name: name,
            fields,
        })
    }

    /// Sets a field value.
    ///
    /// Writes to the identity field are ignored.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let field_name = name.into();
        if field_name != DEVELOPER_NAME_FIELD {
            self.fields.insert(field_name, value.into());
        }
        self
    }

    /// Returns the record identity.
    #[must_use]
    pub const fn developer_name(&self) -> &DeveloperName {
        &self.developer_name
    }

    /// Returns a field value by API name.
    #[must_use]
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields.get(field_name)
    }

    /// Returns all fields, including the identity field.
    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns a shallow merge of this record with a draft.
    ///
    /// Draft fields override record fields; untouched fields are kept. The
    /// identity field is never replaced.
    #[must_use]
    pub fn merged_with(&self, draft: &DraftEdit) -> Self {
        let mut merged = self.clone();
        for (name, value) in draft.fields() {
            if name != DEVELOPER_NAME_FIELD {
                merged.fields.insert(name.clone(), value.clone());
            }
        }
        merged
    }
}

impl TryFrom<FieldMap> for Record {
    type Error = RecordDomainError;

    fn try_from(fields: FieldMap) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<Record> for FieldMap {
    fn from(record: Record) -> Self {
        record.fields
    }
}
