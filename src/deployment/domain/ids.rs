//! Deployment job identifier.

use super::DeploymentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a server-side deployment job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeploymentJobId(String);

impl DeploymentJobId {
    /// Creates a validated job identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentDomainError::EmptyJobId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DeploymentDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DeploymentDomainError::EmptyJobId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Interprets a raw collaborator response.
    ///
    /// Absent and blank identifiers both mean "no job to track".
    #[must_use]
    pub fn from_response(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::new(raw).ok())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeploymentJobId {
    type Error = DeploymentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeploymentJobId> for String {
    fn from(value: DeploymentJobId) -> Self {
        value.0
    }
}

impl AsRef<str> for DeploymentJobId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DeploymentJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
