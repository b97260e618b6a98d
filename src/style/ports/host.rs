//! Page styling port.

use crate::style::domain::StyleSheet;

/// The page a stylesheet is applied to.
pub trait StyleHost: Send + Sync {
    /// Adds the stylesheet to the page head.
    fn install(&self, sheet: &StyleSheet);

    /// Adds a class to the page body.
    fn add_body_class(&self, class: &str);

    /// Removes a class from the page body.
    fn remove_body_class(&self, class: &str);
}
