//! In-memory style host.

use crate::style::{domain::StyleSheet, ports::StyleHost};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Style host that records installs and tracks body classes.
#[derive(Debug, Clone, Default)]
pub struct RecordingStyleHost {
    state: Arc<Mutex<HostState>>,
}

#[derive(Debug, Default)]
struct HostState {
    installed: Vec<String>,
    body_classes: BTreeSet<String>,
}

impl RecordingStyleHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the href of every installed stylesheet, in install order.
    #[must_use]
    pub fn installed(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .installed
            .clone()
    }

    /// Returns `true` when the body carries `class`.
    #[must_use]
    pub fn has_body_class(&self, class: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .body_classes
            .contains(class)
    }
}

impl StyleHost for RecordingStyleHost {
    fn install(&self, sheet: &StyleSheet) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.installed.push(sheet.href().to_owned());
    }

    fn add_body_class(&self, class: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.body_classes.insert(class.to_owned());
    }

    fn remove_body_class(&self, class: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.body_classes.remove(class);
    }
}
