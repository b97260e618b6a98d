//! Record services.

mod reconcile;

pub use reconcile::{Reconciliation, reconcile};
