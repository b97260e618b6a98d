//! Domain model for custom metadata records.
//!
//! Records and drafts are plain field maps. The identity field is validated
//! when a record is constructed and cannot be overwritten afterwards.

mod draft;
mod error;
mod names;
mod record;
mod value;

pub use draft::DraftEdit;
pub use error::RecordDomainError;
pub use names::{DeveloperName, ObjectApiName, QualifiedName};
pub use record::{DEVELOPER_NAME_FIELD, FieldMap, Record};
pub use value::FieldValue;
