//! Notification domain types.

mod notification;

pub use notification::{Notification, Severity};
