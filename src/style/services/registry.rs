//! Reference-counted stylesheet registry.

use crate::style::{domain::StyleSheet, ports::StyleHost};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
struct Usage {
    installed: bool,
    leases: usize,
}

struct Shared<H> {
    host: Arc<H>,
    sheet: StyleSheet,
    usage: Mutex<Usage>,
}

impl<H: StyleHost> Shared<H> {
    fn release(&self) {
        let mut usage = self.usage.lock().unwrap_or_else(PoisonError::into_inner);
        usage.leases = usage.leases.saturating_sub(1);
        if usage.leases == 0 {
            self.host.remove_body_class(self.sheet.body_class());
            debug!(class = self.sheet.body_class(), "last stylesheet lease released");
        }
    }
}

/// Hands out leases on a single global stylesheet.
///
/// The first lease installs the sheet; it is never installed twice. The body
/// class is set while any lease is alive and cleared when the last one drops.
/// Clones share the same count.
pub struct StyleSheetRegistry<H: StyleHost> {
    shared: Arc<Shared<H>>,
}

impl<H: StyleHost> Clone for StyleSheetRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<H: StyleHost> StyleSheetRegistry<H> {
    /// Creates a registry for `sheet` on `host`.
    #[must_use]
    pub fn new(host: Arc<H>, sheet: StyleSheet) -> Self {
        Self {
            shared: Arc::new(Shared {
                host,
                sheet,
                usage: Mutex::new(Usage::default()),
            }),
        }
    }

    /// Returns the managed stylesheet.
    #[must_use]
    pub fn sheet(&self) -> &StyleSheet {
        &self.shared.sheet
    }

    /// Returns the number of live leases.
    #[must_use]
    pub fn active_leases(&self) -> usize {
        self.shared
            .usage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .leases
    }

    /// Takes a lease, installing the sheet on first use.
    #[must_use = "the stylesheet is released when the lease is dropped"]
    pub fn acquire(&self) -> StyleSheetLease<H> {
        let shared = &self.shared;
        let mut usage = shared.usage.lock().unwrap_or_else(PoisonError::into_inner);
        if !usage.installed {
            shared.host.install(&shared.sheet);
            usage.installed = true;
            debug!(href = shared.sheet.href(), "stylesheet installed");
        }
        usage.leases += 1;
        shared.host.add_body_class(shared.sheet.body_class());
        StyleSheetLease {
            shared: Some(Arc::clone(shared)),
        }
    }
}

/// Scoped use of a registry's stylesheet; dropping it releases the lease.
pub struct StyleSheetLease<H: StyleHost> {
    shared: Option<Arc<Shared<H>>>,
}

impl<H: StyleHost> StyleSheetLease<H> {
    /// Releases the lease now.
    pub fn release(mut self) {
        if let Some(shared) = self.shared.take() {
            shared.release();
        }
    }
}

impl<H: StyleHost> Drop for StyleSheetLease<H> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            shared.release();
        }
    }
}
