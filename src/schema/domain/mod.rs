//! Domain model for object schemas and table columns.

mod column;
mod field;

pub use column::{
    ColumnSpec, ColumnType, DateTimeAttributes, FieldRef, PicklistAttributes, RowAction,
    RowActionAttributes, TypeAttributes,
};
pub use field::{FieldCatalog, FieldDataType, FieldDescriptor, ObjectDescribe};
