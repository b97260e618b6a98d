//! Host-supplied table configuration.

use crate::deployment::services::PollerConfig;
use crate::records::domain::ObjectApiName;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;

/// Configuration surface exposed to the host.
///
/// Every key is optional so hosts can pass partial JSON objects.
///
/// # Examples
///
/// ```
/// use cmdt_table::table::domain::TableConfig;
///
/// let config: TableConfig = serde_json::from_str(
///     r#"{"objectApiName": "Feature_Flag__mdt", "fieldsToDisplay": "MasterLabel", "enableEditing": true}"#,
/// )
/// .expect("valid config");
/// assert!(config.enable_editing);
/// assert_eq!(config.object_api_name().map(|name| name.to_string()).as_deref(), Some("Feature_Flag__mdt"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Custom metadata type to display; inferred from the records when absent
    /// or blank.
    pub object_api_name: Option<String>,
    /// Table title; defaults to the type's plural label when absent or empty.
    pub title: Option<String>,
    /// Comma-separated field API names, in display order.
    pub fields_to_display: String,
    /// Whether inline editing is offered.
    pub enable_editing: bool,
    /// Pause between deployment status checks in milliseconds.
    pub poll_interval_ms: Option<u64>,
    /// Upper bound on deployment status checks.
    pub max_status_checks: Option<NonZeroU32>,
}

impl TableConfig {
    /// Creates a configuration for the given display list.
    #[must_use]
    pub fn new(fields_to_display: impl Into<String>) -> Self {
        Self {
            fields_to_display: fields_to_display.into(),
            ..Self::default()
        }
    }

    /// Sets the object type.
    #[must_use]
    pub fn with_object_api_name(mut self, object_api_name: impl Into<String>) -> Self {
        self.object_api_name = Some(object_api_name.into());
        self
    }

    /// Sets the table title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables or disables inline editing.
    #[must_use]
    pub const fn with_editing(mut self, enable_editing: bool) -> Self {
        self.enable_editing = enable_editing;
        self
    }

    /// Sets the pause between status checks.
    #[must_use]
    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = Some(poll_interval_ms);
        self
    }

    /// Sets the status-check limit.
    #[must_use]
    pub const fn with_max_status_checks(mut self, max_status_checks: NonZeroU32) -> Self {
        self.max_status_checks = Some(max_status_checks);
        self
    }

    /// Returns the configured object type, ignoring blank values.
    #[must_use]
    pub fn object_api_name(&self) -> Option<ObjectApiName> {
        self.object_api_name
            .as_deref()
            .and_then(|raw| ObjectApiName::new(raw).ok())
    }

    /// Returns the configured title, ignoring empty values.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Derives the polling configuration.
    #[must_use]
    pub fn poller_config(&self) -> PollerConfig {
        let defaults = PollerConfig::default();
        PollerConfig {
            interval: self
                .poll_interval_ms
                .map_or(defaults.interval, Duration::from_millis),
            max_status_checks: self.max_status_checks,
        }
    }
}
