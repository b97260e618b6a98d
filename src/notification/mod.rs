//! User-facing notifications.
//!
//! Every failure the table recovers from, and every completed operation, is
//! reported through a [`ports::NotificationSink`] supplied by the host.

pub mod adapters;
pub mod domain;
pub mod ports;
