//! Stylesheet descriptor.

use serde::{Deserialize, Serialize};

/// Body class that opts the page into the modal footer rules.
pub const MODAL_FOOTER_FIX_CLASS: &str = "mff-active";

/// A global stylesheet and the body class that activates its rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheet {
    href: String,
    body_class: String,
}

impl StyleSheet {
    /// Creates a stylesheet descriptor.
    #[must_use]
    pub fn new(href: impl Into<String>, body_class: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            body_class: body_class.into(),
        }
    }

    /// Creates the modal footer stylesheet served from `href`.
    #[must_use]
    pub fn modal_footer_fix(href: impl Into<String>) -> Self {
        Self::new(href, MODAL_FOOTER_FIX_CLASS)
    }

    /// Returns the stylesheet location.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the body class toggled while the sheet is in use.
    #[must_use]
    pub fn body_class(&self) -> &str {
        &self.body_class
    }
}
