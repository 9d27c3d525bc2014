//! Notification panel entries.
//!
//! These are the persistent entries behind the bell icon, not toasts.

use serde::{Deserialize, Serialize};

use crate::types::NotificationId;

/// A notification panel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    /// Relative time label, e.g. "2 hours ago".
    pub time_label: String,
    pub read: bool,
    /// Font Awesome icon name without the `fa-` prefix.
    pub icon: String,
}

/// Number of unread entries.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
