//! User-facing notifications.
//!
//! This module provides:
//! - `NotificationStore`: ordered, process-wide queue of status messages
//! - `Notification`, `NotificationKind`, `NotificationId`: the queue entries
//! - `AutoDismiss`: the display-side timer that removes the head entry
//!
//! The store is an explicit handle. Create one at application start and
//! pass clones to whoever reports outcomes; there is no global instance.

mod dismiss;
mod store;

pub use dismiss::{AutoDismiss, DEFAULT_DISMISS_AFTER};
pub use store::{Notification, NotificationId, NotificationKind, NotificationStore};
