//! Column specifications for the table widget.
//!
//! Columns serialize to the datatable column shape (`label`, `fieldName`,
//! `type`, `typeAttributes`, ...), so a host can hand them to its table
//! widget unchanged.

use serde::{Serialize, Serializer};
use std::fmt;

/// Presentation type of a table column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Row action menu.
    Action,
    /// Plain text.
    Text,
    /// Date rendered in the viewer's local calendar.
    DateLocal,
    /// Date and time with explicit display attributes.
    Date,
    /// Picklist value.
    Picklist,
    /// Lookup to another schema entity; never editable.
    Reference,
    /// Any other schema type, passed through unchanged.
    Other(String),
}

impl ColumnType {
    /// Returns the datatable type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "action",
            Self::Text => "text",
            Self::DateLocal => "date-local",
            Self::Date => "date",
            Self::Picklist => "picklist",
            Self::Reference => "reference",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Entry in a row action menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    /// Menu label.
    pub label: String,
    /// Action name delivered with row action events.
    pub name: String,
    /// Icon identifier.
    pub icon_name: String,
    /// Icon placement relative to the label.
    pub icon_position: String,
}

/// Attributes of the row action column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowActionAttributes {
    /// Actions offered for each row.
    pub row_actions: Vec<RowAction>,
    /// Menu alignment.
    pub menu_alignment: String,
}

/// Display attributes for date-time columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeAttributes {
    /// Month format.
    pub month: String,
    /// Day format.
    pub day: String,
    /// Year format.
    pub year: String,
    /// Hour format.
    pub hour: String,
    /// Minute format.
    pub minute: String,
}

impl Default for DateTimeAttributes {
    fn default() -> Self {
        Self {
            month: "2-digit".to_owned(),
            day: "2-digit".to_owned(),
            year: "numeric".to_owned(),
            hour: "2-digit".to_owned(),
            minute: "2-digit".to_owned(),
        }
    }
}

/// Reference to a row field by API name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    /// Referenced field API name.
    pub field_name: String,
}

impl FieldRef {
    /// Creates a field reference.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

/// Value and context bindings for picklist columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PicklistAttributes {
    /// Field holding the selected value.
    pub value: FieldRef,
    /// Field identifying the row.
    pub context: FieldRef,
}

/// Type-specific column attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeAttributes {
    /// Row action menu configuration.
    RowActions(RowActionAttributes),
    /// Date-time display configuration.
    DateTime(DateTimeAttributes),
    /// Picklist binding configuration.
    Picklist(PicklistAttributes),
}

/// Ordered column specification for the table widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    editable: bool,
    #[serde(rename = "type")]
    column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_attributes: Option<TypeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed_width: Option<u32>,
}

impl ColumnSpec {
    /// Creates a data column bound to a record field.
    #[must_use]
    pub fn for_field(
        label: impl Into<String>,
        field_name: impl Into<String>,
        column_type: ColumnType,
    ) -> Self {
        Self {
            label: Some(label.into()),
            field_name: Some(field_name.into()),
            editable: false,
            column_type,
            type_attributes: None,
            fixed_width: None,
        }
    }

    /// Creates a fixed-width row action column.
    #[must_use]
    pub const fn row_actions(attributes: RowActionAttributes, fixed_width: u32) -> Self {
        Self {
            label: None,
            field_name: None,
            editable: false,
            column_type: ColumnType::Action,
            type_attributes: Some(TypeAttributes::RowActions(attributes)),
            fixed_width: Some(fixed_width),
        }
    }

    /// Sets whether cells in this column accept inline edits.
    #[must_use]
    pub const fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets type-specific attributes.
    #[must_use]
    pub fn with_type_attributes(mut self, attributes: TypeAttributes) -> Self {
        self.type_attributes = Some(attributes);
        self
    }

    /// Returns the column label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the bound field API name.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Returns whether the column is inline-editable.
    #[must_use]
    pub const fn editable(&self) -> bool {
        self.editable
    }

    /// Returns the presentation type.
    #[must_use]
    pub const fn column_type(&self) -> &ColumnType {
        &self.column_type
    }

    /// Returns type-specific attributes.
    #[must_use]
    pub const fn type_attributes(&self) -> Option<&TypeAttributes> {
        self.type_attributes.as_ref()
    }

    /// Returns the fixed width in pixels, if any.
    #[must_use]
    pub const fn fixed_width(&self) -> Option<u32> {
        self.fixed_width
    }
}
