//! Identifier types for custom metadata records.

use super::RecordDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the object type and the developer name in a qualified
/// identifier.
const QUALIFIER_SEPARATOR: char = '.';

/// Unique, immutable developer name of a custom metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeveloperName(String);

impl DeveloperName {
    /// Creates a validated developer name.
    ///
    /// The value is kept verbatim because it is matched byte-for-byte against
    /// draft edits and delete identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyDeveloperName`] when the value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(RecordDomainError::EmptyDeveloperName);
        }
        Ok(Self(raw))
    }

    /// Returns the developer name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeveloperName {
    type Error = RecordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeveloperName> for String {
    fn from(value: DeveloperName) -> Self {
        value.0
    }
}

impl AsRef<str> for DeveloperName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DeveloperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// API name of a custom metadata type, such as `Feature_Flag__mdt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectApiName(String);

impl ObjectApiName {
    /// Creates a validated object API name.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyObjectApiName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RecordDomainError::EmptyObjectApiName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the object API name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectApiName {
    type Error = RecordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ObjectApiName> for String {
    fn from(value: ObjectApiName) -> Self {
        value.0
    }
}

impl AsRef<str> for ObjectApiName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ObjectApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Qualified record identifier in `<object type>.<DeveloperName>` form.
///
/// This is the form the delete collaborator requires to address a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Builds the qualified identifier of a record.
    #[must_use]
    pub fn new(object: &ObjectApiName, developer_name: &DeveloperName) -> Self {
        Self(format!("{object}{QUALIFIER_SEPARATOR}{developer_name}"))
    }

    /// Parses a host-supplied qualified identifier.
    ///
    /// No structure is enforced beyond non-emptiness; the trailing segment is
    /// interpreted by [`QualifiedName::developer_name`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyQualifiedName`] when the value is
    /// empty after trimming.
    pub fn parse(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RecordDomainError::EmptyQualifiedName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the trailing segment after the last separator.
    ///
    /// An identifier without a separator is treated as a bare developer name.
    #[must_use]
    pub fn developer_name(&self) -> &str {
        self.0
            .rsplit(QUALIFIER_SEPARATOR)
            .next()
            .unwrap_or(self.0.as_str())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = RecordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<QualifiedName> for String {
    fn from(value: QualifiedName) -> Self {
        value.0
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
