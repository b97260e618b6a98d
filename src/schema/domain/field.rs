//! Field descriptors returned by the schema provider.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field API name to descriptor mapping for one object type.
pub type FieldCatalog = BTreeMap<String, FieldDescriptor>;

/// Lower-cased schema data type of a field.
///
/// An absent data type is treated as `string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct FieldDataType(String);

impl FieldDataType {
    const DEFAULT: &'static str = "string";

    /// Normalizes a raw schema data type.
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        let normalized = raw
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty());
        Self(normalized.unwrap_or_else(|| Self::DEFAULT.to_owned()))
    }

    /// Returns the normalized data type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldDataType {
    fn default() -> Self {
        Self::new(None)
    }
}

impl From<Option<String>> for FieldDataType {
    fn from(value: Option<String>) -> Self {
        Self::new(value.as_deref())
    }
}

impl From<&str> for FieldDataType {
    fn from(value: &str) -> Self {
        Self::new(Some(value))
    }
}

impl From<FieldDataType> for String {
    fn from(value: FieldDataType) -> Self {
        value.0
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Schema description of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    api_name: String,
    label: String,
    #[serde(default)]
    data_type: FieldDataType,
    #[serde(default, rename = "updateable")]
    editable_hint: bool,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(
        api_name: impl Into<String>,
        label: impl Into<String>,
        data_type: impl Into<FieldDataType>,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            label: label.into(),
            data_type: data_type.into(),
            editable_hint: false,
        }
    }

    /// Sets the schema's own editability hint.
    #[must_use]
    pub const fn with_editable_hint(mut self, editable_hint: bool) -> Self {
        self.editable_hint = editable_hint;
        self
    }

    /// Returns the field API name.
    #[must_use]
    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the normalized data type.
    #[must_use]
    pub const fn data_type(&self) -> &FieldDataType {
        &self.data_type
    }

    /// Returns whether the schema reports the field as updateable.
    ///
    /// Column editability does not consult this hint; it is exposed for
    /// hosts that want to surface it.
    #[must_use]
    pub const fn editable_hint(&self) -> bool {
        self.editable_hint
    }
}

/// Describe response for an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescribe {
    fields: FieldCatalog,
    label_plural: String,
}

impl ObjectDescribe {
    /// Creates a describe response from field descriptors.
    ///
    /// Descriptors are keyed by their API name; a later descriptor with the
    /// same name replaces an earlier one.
    #[must_use]
    pub fn new(
        label_plural: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field.api_name().to_owned(), field))
                .collect(),
            label_plural: label_plural.into(),
        }
    }

    /// Returns the field catalog.
    #[must_use]
    pub const fn fields(&self) -> &FieldCatalog {
        &self.fields
    }

    /// Returns the plural object label.
    #[must_use]
    pub fn label_plural(&self) -> &str {
        &self.label_plural
    }
}
