//! Builds ordered table columns from a field catalog and a display list.

use crate::records::domain::DEVELOPER_NAME_FIELD;
use crate::schema::domain::{
    ColumnSpec, ColumnType, DateTimeAttributes, FieldCatalog, FieldDescriptor, FieldRef,
    PicklistAttributes, RowAction, RowActionAttributes, TypeAttributes,
};

/// Name of the row action that deletes a record.
pub const DELETE_ACTION: &str = "delete";

const ACTION_COLUMN_WIDTH: u32 = 80;

/// Splits a comma-separated display list into field API names.
///
/// Tokens are trimmed, empty tokens are dropped and the caller's order is
/// kept.
#[must_use]
pub fn parse_display_list(display_list: &str) -> Vec<&str> {
    display_list
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Builds the ordered column list for the table widget.
///
/// The delete action column always comes first. Each requested field found in
/// `fields` follows in display-list order; unknown names are skipped so stale
/// configuration does not break the table. The function is pure.
#[must_use]
pub fn build_columns(
    fields: &FieldCatalog,
    display_list: &str,
    editing_enabled: bool,
) -> Vec<ColumnSpec> {
    let mut columns = vec![action_column()];
    columns.extend(
        parse_display_list(display_list)
            .into_iter()
            .filter_map(|name| fields.get(name))
            .map(|field| field_column(field, editing_enabled)),
    );
    columns
}

fn action_column() -> ColumnSpec {
    let delete = RowAction {
        label: "Delete".to_owned(),
        name: DELETE_ACTION.to_owned(),
        icon_name: "utility:delete".to_owned(),
        icon_position: "left".to_owned(),
    };
    ColumnSpec::row_actions(
        RowActionAttributes {
            row_actions: vec![delete],
            menu_alignment: "right".to_owned(),
        },
        ACTION_COLUMN_WIDTH,
    )
}

fn field_column(field: &FieldDescriptor, editing_enabled: bool) -> ColumnSpec {
    let (column_type, attributes) = presentation_for(field);
    let editable = editing_enabled
        && field.api_name() != DEVELOPER_NAME_FIELD
        && column_type != ColumnType::Reference;

    let column =
        ColumnSpec::for_field(field.label(), field.api_name(), column_type).with_editable(editable);
    match attributes {
        Some(attributes) => column.with_type_attributes(attributes),
        None => column,
    }
}

fn presentation_for(field: &FieldDescriptor) -> (ColumnType, Option<TypeAttributes>) {
    match field.data_type().as_str() {
        "date" => (ColumnType::DateLocal, None),
        "datetime" => (
            ColumnType::Date,
            Some(TypeAttributes::DateTime(DateTimeAttributes::default())),
        ),
        "picklist" => (
            ColumnType::Picklist,
            Some(TypeAttributes::Picklist(PicklistAttributes {
                value: FieldRef::new(field.api_name()),
                context: FieldRef::new(DEVELOPER_NAME_FIELD),
            })),
        ),
        "string" => (ColumnType::Text, None),
        "reference" => (ColumnType::Reference, None),
        other => (ColumnType::Other(other.to_owned()), None),
    }
}
